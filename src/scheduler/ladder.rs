//! Bounded Leitner ladder
//!
//! Boxes 0..=max_tier each hold a FIFO queue of card ids. The head of the
//! lowest non-empty box is the next card; a correct answer moves a card one
//! box up, a miss sends it back to box 0. Box index alone gates
//! presentation, so the due counter stays at zero under this policy.

use std::collections::VecDeque;

use chrono::Utc;

use super::{Pick, Scheduler, SchedulerKind};
use crate::cards::{Card, CardId, CardStore};

/// Default highest box index (five boxes, 0..=4)
pub const DEFAULT_MAX_TIER: u32 = 4;

pub struct LadderScheduler {
    boxes: Vec<VecDeque<CardId>>,
    presented: Option<CardId>,
    max_tier: u32,
}

impl LadderScheduler {
    pub fn new(max_tier: u32) -> Self {
        Self {
            boxes: vec![VecDeque::new(); (max_tier + 1) as usize],
            presented: None,
            max_tier,
        }
    }

    pub fn max_tier(&self) -> u32 {
        self.max_tier
    }

    fn slot(&self, tier: u32) -> usize {
        tier.min(self.max_tier) as usize
    }
}

impl Default for LadderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TIER)
    }
}

impl Scheduler for LadderScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::Ladder
    }

    fn admit(&mut self, id: CardId, tier: u32) {
        let slot = self.slot(tier);
        self.boxes[slot].push_back(id);
    }

    fn pick_next(&mut self, store: &mut CardStore) -> Pick {
        if let Some(id) = self.presented {
            return Pick::Card(id);
        }
        for bucket in &mut self.boxes {
            while let Some(id) = bucket.pop_front() {
                if store.contains(id) {
                    self.presented = Some(id);
                    return Pick::Card(id);
                }
                log::warn!("Purging unknown card {} from the ladder", id);
            }
        }
        Pick::Empty
    }

    fn record_outcome(&mut self, card: &mut Card, correct: bool) {
        card.tier = if correct {
            (card.tier + 1).min(self.max_tier)
        } else {
            0
        };
        card.due_counter = 0;
        card.review_count += 1;
        if correct {
            card.correct_count += 1;
        }
        card.updated_at = Utc::now();

        let slot = self.slot(card.tier);
        self.boxes[slot].push_back(card.id);
        self.presented = None;
    }

    fn requeue(&mut self, card: &Card) {
        let slot = self.slot(card.tier);
        self.boxes[slot].push_back(card.id);
        self.presented = None;
    }

    fn remove(&mut self, id: CardId) {
        for bucket in &mut self.boxes {
            bucket.retain(|&c| c != id);
        }
        if self.presented == Some(id) {
            self.presented = None;
        }
    }

    fn presented(&self) -> Option<CardId> {
        self.presented
    }

    fn box_stats(&self, store: &CardStore) -> Vec<(String, usize)> {
        let mut counts = vec![0usize; (self.max_tier + 1) as usize];
        for card in store.all() {
            counts[self.slot(card.tier)] += 1;
        }
        counts
            .into_iter()
            .enumerate()
            .map(|(tier, count)| (format!("Box {}", tier + 1), count))
            .collect()
    }

    fn clear(&mut self) {
        for bucket in &mut self.boxes {
            bucket.clear();
        }
        self.presented = None;
    }
}
