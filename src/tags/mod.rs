//! Tag-based lookup over the card collection

pub mod index;

pub use index::{normalize, normalize_all, parse_tag_list, TagIndex};
