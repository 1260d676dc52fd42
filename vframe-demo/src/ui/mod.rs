//! Shared UI pieces for the demo pages

mod link_card;

pub use link_card::LinkCard;
