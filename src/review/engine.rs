//! Review engine: the facade coordinating store, index, and scheduler
//!
//! All cross-structure cascades live here. Multi-step operations validate
//! before the first mutation, so a failure never leaves a card known to
//! one structure and not the others.

use std::collections::HashSet;

use thiserror::Error;

use crate::cards::{Card, CardId, CardStore, CardStoreError};
use crate::scheduler::{Pick, Scheduler, SchedulerKind};
use crate::tags::{self, TagIndex};

use super::models::{NextCard, ReviewStats};

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error(transparent)]
    Store(#[from] CardStoreError),

    #[error("Card {0} is not the one being presented")]
    NotPresented(CardId),
}

pub type Result<T> = std::result::Result<T, ReviewError>;

/// One review context: a card collection, its tag index, and a scheduler
pub struct ReviewEngine {
    store: CardStore,
    index: TagIndex,
    scheduler: Box<dyn Scheduler>,
}

impl ReviewEngine {
    pub fn new(kind: SchedulerKind) -> Self {
        Self::with_scheduler(kind.build())
    }

    /// Build an engine around a specific scheduler instance, e.g. a ladder
    /// with a non-default box count
    pub fn with_scheduler(scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            store: CardStore::new(),
            index: TagIndex::new(),
            scheduler,
        }
    }

    pub fn scheduler_kind(&self) -> SchedulerKind {
        self.scheduler.kind()
    }

    // ==================== Card management ====================

    /// Add a card: store it, index every tag, admit it for review.
    /// Validation happens before any state changes; the steps after it
    /// cannot fail, so the cascade is atomic.
    pub fn add_card(&mut self, question: &str, answer: &str, tags: &[String]) -> Result<Card> {
        let card = self.store.add(question, answer, tags)?.clone();
        for tag in &card.tags {
            self.index.register(tag, card.id);
        }
        self.scheduler.admit(card.id, 0);
        Ok(card)
    }

    /// Replace a card's content, reconciling the tag index with the change.
    /// Scheduling state is untouched.
    pub fn edit_card(
        &mut self,
        id: CardId,
        question: &str,
        answer: &str,
        tags: &[String],
    ) -> Result<Card> {
        let old_tags = self.store.get(id)?.tags.clone();
        let card = self.store.edit(id, question, answer, tags)?.clone();
        for tag in &old_tags {
            self.index.unregister(tag, id);
        }
        for tag in &card.tags {
            self.index.register(tag, id);
        }
        Ok(card)
    }

    /// Delete a card: scheduler first, then the tag index, then the store,
    /// so no structure can observe the id after removal begins
    pub fn delete_card(&mut self, id: CardId) -> Result<Card> {
        let card_tags = self.store.get(id)?.tags.clone();
        self.scheduler.remove(id);
        for tag in &card_tags {
            self.index.unregister(tag, id);
        }
        Ok(self.store.delete(id)?)
    }

    pub fn get_card(&self, id: CardId) -> Result<Card> {
        Ok(self.store.get(id)?.clone())
    }

    /// All cards in insertion order
    pub fn list_all(&self) -> Vec<Card> {
        self.store.all().cloned().collect()
    }

    /// Cards bearing the given tag; mixed-case queries match.
    /// Ids that no longer resolve are skipped.
    pub fn search_by_tag(&self, tag: &str) -> Vec<Card> {
        let mut cards = Vec::new();
        for &id in self.index.lookup(tag) {
            match self.store.get(id) {
                Ok(card) => cards.push(card.clone()),
                Err(_) => log::warn!("Tag index references unknown card {}", id),
            }
        }
        cards
    }

    pub fn tags_with_counts(&self) -> Vec<(String, usize)> {
        self.index.tags_with_counts()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ==================== Review flow ====================

    /// Next due card, if any. Asking again while a card is already held
    /// out returns that same card.
    pub fn next_card(&mut self) -> Result<NextCard> {
        match self.scheduler.pick_next(&mut self.store) {
            Pick::Card(id) => Ok(NextCard::Due(self.store.get(id)?.clone())),
            Pick::NoneDue => Ok(NextCard::NotYetDue),
            Pick::Empty => Ok(NextCard::Exhausted),
        }
    }

    /// Record the outcome for the card currently presented
    pub fn submit(&mut self, id: CardId, correct: bool) -> Result<Card> {
        if self.scheduler.presented() != Some(id) {
            return Err(ReviewError::NotPresented(id));
        }
        let card = self.store.get_mut(id)?;
        self.scheduler.record_outcome(card, correct);
        Ok(self.store.get(id)?.clone())
    }

    /// Put the presented card back unchanged (stop practicing mid-card)
    pub fn postpone(&mut self) {
        let Some(id) = self.scheduler.presented() else { return };
        match self.store.get(id) {
            Ok(card) => {
                let card = card.clone();
                self.scheduler.requeue(&card);
            }
            Err(_) => {
                log::warn!("Presented card {} no longer exists; dropping it", id);
                self.scheduler.remove(id);
            }
        }
    }

    // ==================== Statistics ====================

    /// Live cards grouped by tier with a policy label
    pub fn box_stats(&self) -> Vec<(String, usize)> {
        self.scheduler.box_stats(&self.store)
    }

    pub fn review_stats(&self) -> ReviewStats {
        let mut stats = ReviewStats {
            total_cards: self.store.len(),
            ..ReviewStats::default()
        };
        for card in self.store.all() {
            if card.is_due() {
                stats.due_cards += 1;
            }
            stats.total_reviews += card.review_count;
            stats.correct_reviews += card.correct_count;
        }
        stats
    }

    // ==================== Persistence boundary ====================

    /// Every live card as an ordered sequence of records
    pub fn export(&self) -> Vec<Card> {
        self.store.all().cloned().collect()
    }

    /// Rebuild the whole context from exported records. Existing state is
    /// reset first; a bad record fails the import before anything is
    /// touched, and the id high-water mark becomes max(imported ids) + 1.
    pub fn import(&mut self, records: Vec<Card>) -> Result<()> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.question.trim().is_empty() {
                return Err(CardStoreError::EmptyQuestion.into());
            }
            if record.answer.trim().is_empty() {
                return Err(CardStoreError::EmptyAnswer.into());
            }
            if !seen.insert(record.id) {
                return Err(CardStoreError::DuplicateId(record.id).into());
            }
        }

        self.store.clear();
        self.index.clear();
        self.scheduler.clear();

        let count = records.len();
        for mut record in records {
            record.tags = tags::normalize_all(&record.tags);
            let id = record.id;
            let tier = record.tier;
            let record_tags = record.tags.clone();
            self.store.insert_record(record)?;
            for tag in &record_tags {
                self.index.register(tag, id);
            }
            self.scheduler.admit(id, tier);
        }
        log::info!("Imported {} cards", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_list(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn due_card(next: NextCard) -> Card {
        match next {
            NextCard::Due(card) => card,
            other => panic!("expected a due card, got {:?}", other),
        }
    }

    #[test]
    fn test_new_card_is_presented_immediately() {
        for kind in [SchedulerKind::Ladder, SchedulerKind::Rotation] {
            let mut engine = ReviewEngine::new(kind);
            let card = engine.add_card("q", "a", &[]).unwrap();
            assert_eq!(card.tier, 0);
            assert_eq!(card.due_counter, 0);

            let next = due_card(engine.next_card().unwrap());
            assert_eq!(next.id, card.id);
        }
    }

    #[test]
    fn test_full_review_scenario_on_ladder() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        let card = engine
            .add_card("What is FIFO?", "First In First Out", &tag_list(&["queue", "ds"]))
            .unwrap();

        let next = due_card(engine.next_card().unwrap());
        assert_eq!(next.id, card.id);

        let updated = engine.submit(card.id, true).unwrap();
        assert_eq!(updated.tier, 1);

        // Lookup still finds the card, regardless of query case
        assert_eq!(engine.search_by_tag("queue")[0].id, card.id);
        assert_eq!(engine.search_by_tag("QUEUE")[0].id, card.id);
    }

    #[test]
    fn test_rotation_pass_signals_not_yet_due() {
        let mut engine = ReviewEngine::new(SchedulerKind::Rotation);
        let card = engine.add_card("q", "a", &[]).unwrap();

        due_card(engine.next_card().unwrap());
        engine.submit(card.id, true).unwrap();

        // The card now waits one rotation
        assert!(matches!(engine.next_card().unwrap(), NextCard::NotYetDue));
        assert_eq!(due_card(engine.next_card().unwrap()).id, card.id);
    }

    #[test]
    fn test_submit_rejects_card_not_presented() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        let a = engine.add_card("q1", "a1", &[]).unwrap();
        let b = engine.add_card("q2", "a2", &[]).unwrap();

        assert_eq!(due_card(engine.next_card().unwrap()).id, a.id);
        assert!(matches!(
            engine.submit(b.id, true),
            Err(ReviewError::NotPresented(_))
        ));
    }

    #[test]
    fn test_next_repeats_presented_card() {
        let mut engine = ReviewEngine::new(SchedulerKind::Rotation);
        let card = engine.add_card("q", "a", &[]).unwrap();

        assert_eq!(due_card(engine.next_card().unwrap()).id, card.id);
        assert_eq!(due_card(engine.next_card().unwrap()).id, card.id);
    }

    #[test]
    fn test_postpone_requeues_unchanged() {
        let mut engine = ReviewEngine::new(SchedulerKind::Rotation);
        let card = engine.add_card("q", "a", &[]).unwrap();

        due_card(engine.next_card().unwrap());
        engine.postpone();

        let again = due_card(engine.next_card().unwrap());
        assert_eq!(again.id, card.id);
        assert_eq!(again.review_count, 0);
    }

    #[test]
    fn test_delete_cascades_through_index_and_scheduler() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        let doomed = engine
            .add_card("q1", "a1", &tag_list(&["queue", "ds"]))
            .unwrap();
        let kept = engine.add_card("q2", "a2", &tag_list(&["ds"])).unwrap();

        engine.delete_card(doomed.id).unwrap();

        assert!(engine.search_by_tag("queue").is_empty());
        let ds: Vec<CardId> = engine.search_by_tag("ds").iter().map(|c| c.id).collect();
        assert_eq!(ds, vec![kept.id]);

        // The emptied bucket is gone entirely
        assert_eq!(engine.tags_with_counts(), vec![("ds".to_string(), 1)]);

        assert_eq!(due_card(engine.next_card().unwrap()).id, kept.id);
        engine.submit(kept.id, true).unwrap();
        assert!(matches!(engine.next_card().unwrap(), NextCard::Due(_)));
    }

    #[test]
    fn test_delete_while_presented() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        let card = engine.add_card("q", "a", &[]).unwrap();

        due_card(engine.next_card().unwrap());
        engine.delete_card(card.id).unwrap();

        assert!(matches!(engine.next_card().unwrap(), NextCard::Exhausted));
        assert!(matches!(
            engine.submit(card.id, true),
            Err(ReviewError::NotPresented(_))
        ));
    }

    #[test]
    fn test_edit_reconciles_tag_index() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        let card = engine.add_card("q", "a", &tag_list(&["old"])).unwrap();

        engine
            .edit_card(card.id, "q", "a", &tag_list(&["new"]))
            .unwrap();

        assert!(engine.search_by_tag("old").is_empty());
        assert_eq!(engine.search_by_tag("new")[0].id, card.id);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut engine = ReviewEngine::new(SchedulerKind::Rotation);
        engine.add_card("q1", "a1", &tag_list(&["queue"])).unwrap();
        let b = engine.add_card("q2", "a2", &tag_list(&["ds", "srs"])).unwrap();
        engine.add_card("q3", "a3", &[]).unwrap();

        due_card(engine.next_card().unwrap());
        engine.submit(1, true).unwrap();
        due_card(engine.next_card().unwrap());
        engine.submit(b.id, false).unwrap();

        let exported = engine.export();

        let mut restored = ReviewEngine::new(SchedulerKind::Rotation);
        restored.import(exported.clone()).unwrap();

        let tuples = |cards: &[Card]| -> Vec<(CardId, String, String, Vec<String>, u32, u32)> {
            cards
                .iter()
                .map(|c| {
                    (
                        c.id,
                        c.question.clone(),
                        c.answer.clone(),
                        c.tags.clone(),
                        c.tier,
                        c.due_counter,
                    )
                })
                .collect()
        };
        assert_eq!(tuples(&restored.export()), tuples(&exported));

        // The index came back with the cards
        assert_eq!(restored.search_by_tag("SRS")[0].id, b.id);
    }

    #[test]
    fn test_import_resets_state_and_high_water_mark() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        engine.add_card("q1", "a1", &tag_list(&["stale"])).unwrap();

        let mut record = Card::new(7, "restored".to_string(), "a".to_string(), Vec::new());
        record.tier = 2;
        engine.import(vec![record]).unwrap();

        assert_eq!(engine.len(), 1);
        assert!(engine.search_by_tag("stale").is_empty());

        let next = engine.add_card("q2", "a2", &[]).unwrap();
        assert_eq!(next.id, 8);
    }

    #[test]
    fn test_import_restores_scheduling_position() {
        let mut promoted = Card::new(1, "hard".to_string(), "a".to_string(), Vec::new());
        promoted.tier = 3;
        let fresh = Card::new(2, "new".to_string(), "a".to_string(), Vec::new());

        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        engine.import(vec![promoted, fresh]).unwrap();

        // The fresh card sits in a lower box and wins
        assert_eq!(due_card(engine.next_card().unwrap()).id, 2);
    }

    #[test]
    fn test_import_rejects_bad_records_without_touching_state() {
        let mut engine = ReviewEngine::new(SchedulerKind::Ladder);
        let existing = engine.add_card("q", "a", &tag_list(&["keep"])).unwrap();

        let dup = vec![
            Card::new(5, "x".to_string(), "y".to_string(), Vec::new()),
            Card::new(5, "x2".to_string(), "y2".to_string(), Vec::new()),
        ];
        assert!(matches!(
            engine.import(dup),
            Err(ReviewError::Store(CardStoreError::DuplicateId(5)))
        ));

        let blank = vec![Card::new(6, "  ".to_string(), "y".to_string(), Vec::new())];
        assert!(engine.import(blank).is_err());

        // Prior state is intact
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.search_by_tag("keep")[0].id, existing.id);
    }

    #[test]
    fn test_review_stats_accumulate() {
        let mut engine = ReviewEngine::new(SchedulerKind::Rotation);
        let a = engine.add_card("q1", "a1", &[]).unwrap();
        engine.add_card("q2", "a2", &[]).unwrap();

        due_card(engine.next_card().unwrap());
        engine.submit(a.id, true).unwrap();

        let stats = engine.review_stats();
        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.due_cards, 1);
        assert_eq!(stats.total_reviews, 1);
        assert_eq!(stats.correct_reviews, 1);
    }
}
