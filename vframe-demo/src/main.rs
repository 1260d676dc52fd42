fn main() {
    dioxus::launch(vframe_demo::App);
}
