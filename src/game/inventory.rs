use std::collections::HashSet;

use super::types::RUN_GOAL;
use super::{Card, SpiderGame, Suit};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryCounts {
    pub total: usize,
    pub tableau: usize,
    pub stock: usize,
    pub foundations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    pub ok: bool,
    pub issues: Vec<String>,
    pub counts: InventoryCounts,
    pub notes: Vec<String>,
}

impl SpiderGame {
    /// Recounts everything from scratch and cross-checks against what
    /// the (difficulty, aces) deck must contain. Diagnostic only: every
    /// discrepancy becomes its own issue string, nothing halts early,
    /// and state is never touched.
    pub fn verify_inventory(&self) -> InventoryReport {
        let mut issues = Vec::new();
        let mut notes = Vec::new();

        let tableau: usize = self.tableau.iter().map(Vec::len).sum();
        let counts = InventoryCounts {
            total: tableau + self.stock.len() + self.foundations.cards.len(),
            tableau,
            stock: self.stock.len(),
            foundations: self.foundations.cards.len(),
        };

        let expected_total = self.deck_size();
        if counts.total != expected_total {
            issues.push(format!(
                "total card count is {} but a {} deck holds {}",
                counts.total,
                self.difficulty.id(),
                expected_total
            ));
        }

        let mut seen_ids = HashSet::new();
        let mut suit_counts = [0_usize; 4];
        let mut rank_counts = [0_usize; 14];
        for card in self.all_cards() {
            if !seen_ids.insert(card.id) {
                issues.push(format!("card id {} appears in more than one place", card.id));
            }
            suit_counts[card.suit.index()] += 1;
            if (1..=13).contains(&card.rank) {
                rank_counts[card.rank as usize] += 1;
            } else {
                issues.push(format!("card id {} has impossible rank {}", card.id, card.rank));
            }
        }

        let in_play = self.difficulty.suits();
        let expected_per_suit = expected_total / in_play.len();
        for suit in Suit::ALL {
            let expected = if in_play.contains(&suit) {
                expected_per_suit
            } else {
                0
            };
            let actual = suit_counts[suit.index()];
            if actual != expected {
                issues.push(format!(
                    "suit {} has {} cards, expected {}",
                    suit.short(),
                    actual,
                    expected
                ));
            }
        }

        for rank in 1..=13_u8 {
            let expected = if rank == 1 && !self.include_aces { 0 } else { 8 };
            let actual = rank_counts[rank as usize];
            if actual != expected {
                issues.push(format!(
                    "rank {} has {} cards, expected {}",
                    rank, actual, expected
                ));
            }
        }

        for (col, pile) in self.tableau.iter().enumerate() {
            if let Some(first_up) = pile.iter().position(|card| card.face_up) {
                if pile[first_up..].iter().any(|card| !card.face_up) {
                    issues.push(format!(
                        "column {col} has a face-down card above a face-up card"
                    ));
                }
            }
        }

        if self.foundations.completed > RUN_GOAL {
            issues.push(format!(
                "{} completed runs recorded, more than the {} possible",
                self.foundations.completed, RUN_GOAL
            ));
        }
        if self.foundations.completed * self.run_length() != self.foundations.cards.len() {
            issues.push(format!(
                "{} completed runs should hold {} cards, found {}",
                self.foundations.completed,
                self.foundations.completed * self.run_length(),
                self.foundations.cards.len()
            ));
        }

        if self.deals_remaining != self.stock.len().div_ceil(10) {
            issues.push(format!(
                "deals remaining is {} but the stock of {} supports {}",
                self.deals_remaining,
                self.stock.len(),
                self.stock.len().div_ceil(10)
            ));
        }

        notes.push(format!(
            "{} of {} runs completed",
            self.foundations.completed, RUN_GOAL
        ));
        notes.push(format!("{} deal(s) remaining", self.deals_remaining));

        InventoryReport {
            ok: issues.is_empty(),
            issues,
            counts,
            notes,
        }
    }

    fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .flatten()
            .chain(self.stock.iter())
            .chain(self.foundations.cards.iter())
    }
}
