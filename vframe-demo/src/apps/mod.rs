//! Example frame apps: a schema, a storage key and a presentational
//! `Content` component each

pub mod episode;
pub mod lower_third;
