//! Example app pages: editor by default, bare frame with `?rendering`.
//! `format` seeds the editor the same way the content fields do: it only
//! applies while nothing is stored under the app's key.

use crate::apps::episode::{self, EpisodeContent};
use crate::apps::lower_third::{self, LowerThirdContent};
use crate::query::{render_url, FrameQuery};
use dioxus::prelude::*;
use vframe_common::{ContentParams, Format};
use vframe_ui::{FrameViewport, RenderContent, RenderingView, VideoFrame};

#[component]
pub fn Episode(query: String) -> Element {
    let query = FrameQuery::parse(&query);
    let schema = episode::schema();
    let content = query.content(&schema);
    let outro = query.is_outro();

    if query.is_rendering() {
        let format = query.format();
        return rsx! {
            RenderingView {
                FrameViewport { width: format.width, height: format.height,
                    EpisodeContent { content, outro }
                }
            }
        };
    }

    let flags: &'static [&'static str] = if outro { &["outro"] } else { &[] };
    let url_schema = schema.clone();

    rsx! {
        VideoFrame {
            storage_key: episode::STORAGE_KEY.to_string(),
            initial_content: content,
            initial_format: query.format(),
            schema,
            title: if outro { "Episode card (outro)".to_string() } else { "Episode card".to_string() },
            render: RenderContent::new(move |content| rsx! {
                EpisodeContent { content, outro }
            }),
            render_url: move |(content, format): (ContentParams, Format)| {
                render_url(episode::PATH, &url_schema, &content, &format, flags)
            },
        }
    }
}

#[component]
pub fn LowerThird(query: String) -> Element {
    let query = FrameQuery::parse(&query);
    let schema = lower_third::schema();
    let content = query.content(&schema);

    if query.is_rendering() {
        let format = query.format();
        return rsx! {
            RenderingView {
                FrameViewport { width: format.width, height: format.height,
                    LowerThirdContent { content }
                }
            }
        };
    }

    let url_schema = schema.clone();

    rsx! {
        VideoFrame {
            storage_key: lower_third::STORAGE_KEY.to_string(),
            initial_content: content,
            initial_format: query.format(),
            schema,
            title: "Lower third".to_string(),
            render: RenderContent::new(|content| rsx! {
                LowerThirdContent { content }
            }),
            render_url: move |(content, format): (ContentParams, Format)| {
                render_url(lower_third::PATH, &url_schema, &content, &format, &[])
            },
        }
    }
}
