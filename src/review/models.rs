//! Review session models

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Outcome of asking the engine for the next card
#[derive(Debug, Clone)]
pub enum NextCard {
    /// A card is due; it stays held out until submitted or postponed
    Due(Card),
    /// Nothing came due this pass; the rotation advanced, ask again
    NotYetDue,
    /// The collection has no cards left to review
    Exhausted,
}

/// Aggregate review statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    pub due_cards: usize,
    pub total_reviews: u32,
    pub correct_reviews: u32,
}
