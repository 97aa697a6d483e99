//! Tag index: non-owning lookup from normalized tag to card ids
//!
//! The index mirrors the card collection and holds ids only; every change
//! to a card's tag set must be reflected here by the calling facade.

use std::collections::HashMap;

use crate::cards::CardId;

/// Normalize a tag for use as a lookup key: trim whitespace, lower-case.
/// Returns None when nothing remains.
pub fn normalize(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Parse a comma-separated tag list into normalized tags, de-duplicated,
/// first-seen order preserved
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for part in raw.split(',') {
        if let Some(tag) = normalize(part) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Normalize and de-duplicate an already-split tag list
pub fn normalize_all(raw: &[String]) -> Vec<String> {
    let mut tags = Vec::new();
    for part in raw {
        if let Some(tag) = normalize(part) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Maps a normalized tag to the ids of the cards bearing it
#[derive(Debug, Default)]
pub struct TagIndex {
    buckets: HashMap<String, Vec<CardId>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card id under a tag, creating the bucket if needed.
    /// Ids are appended in registration order; duplicates are ignored.
    pub fn register(&mut self, tag: &str, id: CardId) {
        let Some(tag) = normalize(tag) else { return };
        let bucket = self.buckets.entry(tag).or_default();
        if !bucket.contains(&id) {
            bucket.push(id);
        }
    }

    /// Remove a card id from a tag's bucket; an emptied bucket is deleted
    pub fn unregister(&mut self, tag: &str, id: CardId) {
        let Some(tag) = normalize(tag) else { return };
        if let Some(bucket) = self.buckets.get_mut(&tag) {
            bucket.retain(|&c| c != id);
            if bucket.is_empty() {
                self.buckets.remove(&tag);
            }
        }
    }

    /// Card ids registered under a tag, in registration order.
    /// An unknown tag yields an empty slice, not an error.
    pub fn lookup(&self, tag: &str) -> &[CardId] {
        normalize(tag)
            .and_then(|t| self.buckets.get(&t))
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// All tags with their card counts, sorted alphabetically
    pub fn tags_with_counts(&self) -> Vec<(String, usize)> {
        let mut tags: Vec<(String, usize)> = self
            .buckets
            .iter()
            .map(|(tag, ids)| (tag.clone(), ids.len()))
            .collect();
        tags.sort_by(|a, b| a.0.cmp(&b.0));
        tags
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
