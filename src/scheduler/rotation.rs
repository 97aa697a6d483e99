//! Rotation-queue scheduler with countdown intervals
//!
//! A single FIFO holds every card. One pass dequeues at most the queue's
//! current length: cards still counting down are decremented and sent to
//! the back; the first card whose counter reached zero is presented. A
//! correct answer doubles the card's interval and the counter skips that
//! many rotations; a miss resets both to 1. The counter, not the wall
//! clock, drives due-ness, so a session replays identically from the same
//! outcome sequence.

use std::collections::{BTreeMap, VecDeque};

use chrono::Utc;

use super::{Pick, Scheduler, SchedulerKind};
use crate::cards::{Card, CardId, CardStore};

#[derive(Default)]
pub struct RotationScheduler {
    queue: VecDeque<CardId>,
    presented: Option<CardId>,
}

impl RotationScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for RotationScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::Rotation
    }

    fn admit(&mut self, id: CardId, _tier: u32) {
        self.queue.push_back(id);
    }

    fn pick_next(&mut self, store: &mut CardStore) -> Pick {
        if let Some(id) = self.presented {
            return Pick::Card(id);
        }
        // Bound the scan by the current size so a pass always terminates
        let scan = self.queue.len();
        for _ in 0..scan {
            let Some(id) = self.queue.pop_front() else { break };
            let card = match store.get_mut(id) {
                Ok(card) => card,
                Err(_) => {
                    log::warn!("Purging unknown card {} from the rotation queue", id);
                    continue;
                }
            };
            if card.due_counter > 0 {
                card.due_counter -= 1;
                self.queue.push_back(id);
            } else {
                self.presented = Some(id);
                return Pick::Card(id);
            }
        }
        if self.queue.is_empty() {
            Pick::Empty
        } else {
            Pick::NoneDue
        }
    }

    fn record_outcome(&mut self, card: &mut Card, correct: bool) {
        if correct {
            card.tier = (card.tier * 2).max(1);
            card.due_counter = card.tier;
            card.correct_count += 1;
        } else {
            card.tier = 1;
            card.due_counter = 1;
        }
        card.review_count += 1;
        card.updated_at = Utc::now();

        self.queue.push_back(card.id);
        self.presented = None;
    }

    fn requeue(&mut self, card: &Card) {
        self.queue.push_back(card.id);
        self.presented = None;
    }

    fn remove(&mut self, id: CardId) {
        self.queue.retain(|&c| c != id);
        if self.presented == Some(id) {
            self.presented = None;
        }
    }

    fn presented(&self) -> Option<CardId> {
        self.presented
    }

    fn box_stats(&self, store: &CardStore) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for card in store.all() {
            *counts.entry(card.tier).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(tier, count)| {
                let label = if tier == 0 {
                    "New".to_string()
                } else {
                    format!("Interval {}", tier)
                };
                (label, count)
            })
            .collect()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.presented = None;
    }
}
