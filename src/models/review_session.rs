//! Review session management for spaced repetition practice.
//! Runs today's due queue in rounds, repeating items that were not recalled.

use super::{ItemType, Rating, ReviewItem, SessionCard};
use crate::srs::SrsService;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

/// Manages a review session with multiple rounds.
/// Items graded below 3 are repeated in subsequent rounds.
pub struct ReviewSession {
    pub all_cards: Vec<SessionCard>,
    pub current_round_cards: Vec<usize>,
    pub current_index: usize,
    pub show_answer: bool,
    pub round_number: usize,
}

impl ReviewSession {
    /// Creates a session over the given due items in their given order.
    pub fn new_from_due_items(items: Vec<ReviewItem>) -> Self {
        let all_cards: Vec<_> = items.into_iter().map(SessionCard::new).collect();
        let indices: Vec<usize> = (0..all_cards.len()).collect();

        Self {
            all_cards,
            current_round_cards: indices,
            current_index: 0,
            show_answer: false,
            round_number: 1,
        }
    }

    /// Creates a session with the due items in random order.
    pub fn shuffled<R: Rng + ?Sized>(mut items: Vec<ReviewItem>, rng: &mut R) -> Self {
        items.shuffle(rng);
        Self::new_from_due_items(items)
    }

    pub fn current_card(&self) -> Option<&SessionCard> {
        self.current_round_cards
            .get(self.current_index)
            .and_then(|&idx| self.all_cards.get(idx))
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn next_card(&mut self) {
        if self.current_index + 1 < self.current_round_cards.len() {
            self.current_index += 1;
            self.show_answer = false;
        } else {
            self.start_next_round();
        }
    }

    fn round_cards(&self) -> impl Iterator<Item = &SessionCard> + '_ {
        self.current_round_cards
            .iter()
            .filter_map(|&idx| self.all_cards.get(idx))
    }

    /// Moves the items still not recalled into a new round.
    /// If none remain, the session is complete.
    fn start_next_round(&mut self) {
        let retry: Vec<usize> = self
            .current_round_cards
            .iter()
            .copied()
            .filter(|&idx| self.all_cards.get(idx).is_some_and(|card| !card.is_recalled()))
            .collect();

        if retry.is_empty() {
            return;
        }
        self.current_round_cards = retry;
        self.current_index = 0;
        self.show_answer = false;
        self.round_number += 1;
    }

    /// Grades the current item and records the review through the service.
    /// The item's new state decides whether it comes back in a later round.
    pub fn grade_current_card(&mut self, service: &SrsService, rating: Rating) {
        let Some(&actual_idx) = self.current_round_cards.get(self.current_index) else {
            return;
        };
        let Some(card) = self.all_cards.get_mut(actual_idx) else {
            return;
        };

        match service.update_item(&card.item, rating.quality()) {
            Some(updated) => card.record_review(updated, service.now()),
            None => {
                // Deleted since the session started; nothing left to review
                warn!(item = %card.item.key(), "graded item no longer tracked");
                card.mark_untracked(service.now());
            }
        }
    }

    /// Items in this round whose last grade was a pass.
    pub fn learned_count(&self) -> usize {
        self.round_cards().filter(|card| card.is_recalled()).count()
    }

    pub fn total_count(&self) -> usize {
        self.current_round_cards.len()
    }

    /// Items in this round that are ungraded or were last failed.
    pub fn remaining_count(&self) -> usize {
        self.round_cards().filter(|card| !card.is_recalled()).count()
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_count() == 0
    }

    pub fn phase_message(&self) -> String {
        let words = self
            .round_cards()
            .filter(|card| card.item.item_type == ItemType::Word)
            .count();
        let sentences = self.total_count() - words;

        if self.round_number == 1 {
            format!(
                "Round 1: {} items ({words} words, {sentences} sentences)",
                self.total_count()
            )
        } else {
            format!(
                "Round {} (Review): {} items to retry",
                self.round_number,
                self.remaining_count()
            )
        }
    }
}
