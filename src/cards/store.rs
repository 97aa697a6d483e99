//! Card storage: the single source of truth for card content and existence

use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;

use super::models::{Card, CardId};
use crate::tags;

#[derive(Error, Debug)]
pub enum CardStoreError {
    #[error("Question must not be empty")]
    EmptyQuestion,

    #[error("Answer must not be empty")]
    EmptyAnswer,

    #[error("Card not found: {0}")]
    NotFound(CardId),

    #[error("Duplicate card id: {0}")]
    DuplicateId(CardId),
}

pub type Result<T> = std::result::Result<T, CardStoreError>;

/// Owns all cards and allocates their ids
#[derive(Debug)]
pub struct CardStore {
    cards: BTreeMap<CardId, Card>,
    next_id: CardId,
}

impl CardStore {
    pub fn new() -> Self {
        Self {
            cards: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Validate and store a new card, assigning the next id.
    /// Question and answer are trimmed; tags are normalized and de-duplicated.
    pub fn add(&mut self, question: &str, answer: &str, tags: &[String]) -> Result<&Card> {
        let (question, answer) = validated_content(question, answer)?;
        let tags = tags::normalize_all(tags);

        let id = self.next_id;
        self.next_id += 1;

        self.cards.insert(id, Card::new(id, question, answer, tags));
        self.get(id)
    }

    pub fn get(&self, id: CardId) -> Result<&Card> {
        self.cards.get(&id).ok_or(CardStoreError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: CardId) -> Result<&mut Card> {
        self.cards.get_mut(&id).ok_or(CardStoreError::NotFound(id))
    }

    /// Replace a card's content in place. Scheduling state is untouched;
    /// tag changes must be reconciled with the tag index by the caller.
    pub fn edit(&mut self, id: CardId, question: &str, answer: &str, tags: &[String]) -> Result<&Card> {
        let (question, answer) = validated_content(question, answer)?;
        let tags = tags::normalize_all(tags);

        let card = self.cards.get_mut(&id).ok_or(CardStoreError::NotFound(id))?;
        card.question = question;
        card.answer = answer;
        card.tags = tags;
        card.updated_at = Utc::now();
        Ok(card)
    }

    /// Remove a card and return it. Cascading removal from the tag index
    /// and scheduler happens before this call.
    pub fn delete(&mut self, id: CardId) -> Result<Card> {
        self.cards.remove(&id).ok_or(CardStoreError::NotFound(id))
    }

    /// Store a card under its existing id, advancing the id high-water mark.
    /// Used when restoring from a persisted snapshot.
    pub fn insert_record(&mut self, card: Card) -> Result<()> {
        if self.cards.contains_key(&card.id) {
            return Err(CardStoreError::DuplicateId(card.id));
        }
        self.next_id = self.next_id.max(card.id + 1);
        self.cards.insert(card.id, card);
        Ok(())
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Iterate cards in insertion order (ids are monotonic, so id order)
    pub fn all(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.values()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove every card and reset id allocation. This is the restore-path
    /// reset; deleting cards one by one never reuses their ids.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.next_id = 1;
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validated_content(question: &str, answer: &str) -> Result<(String, String)> {
    let question = question.trim();
    if question.is_empty() {
        return Err(CardStoreError::EmptyQuestion);
    }
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CardStoreError::EmptyAnswer);
    }
    Ok((question.to_string(), answer.to_string()))
}
