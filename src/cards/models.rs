//! Data models for the card collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a card. Assigned monotonically, never reused.
pub type CardId = u64;

/// A flashcard with question (front) and answer (back)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    /// Normalized tags, insertion order preserved for display
    #[serde(default)]
    pub tags: Vec<String>,
    /// Position on the review ladder: box index for the Leitner policy,
    /// current interval for the rotation policy
    #[serde(default)]
    pub tier: u32,
    /// Rotations remaining before the card is due (0 = due now)
    #[serde(default)]
    pub due_counter: u32,
    /// Total number of reviews
    #[serde(default)]
    pub review_count: u32,
    /// Number of correct responses
    #[serde(default)]
    pub correct_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(id: CardId, question: String, answer: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            question,
            answer,
            tags,
            tier: 0,
            due_counter: 0,
            review_count: 0,
            correct_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the card is eligible for presentation now
    pub fn is_due(&self) -> bool {
        self.due_counter == 0
    }
}
