use super::{Card, SpiderGame};

/// One applied, reversible operation. Each variant carries exactly what
/// its inverse needs; `score_delta` is the signed change that actually
/// landed (the per-move penalty is floored at score 0, so the clipped
/// value must be remembered for undo to be exact).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    Move {
        from: usize,
        to: usize,
        cards: Vec<Card>,
        flipped: Option<Card>,
        score_delta: i32,
    },
    Deal {
        cards: Vec<Card>,
        score_delta: i32,
    },
    Complete {
        col: usize,
        cards: Vec<Card>,
        flipped: Option<Card>,
    },
}

impl SpiderGame {
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Reverses the most recent history entry and parks it on the redo
    /// stack. Silent no-op when there is nothing to undo.
    pub fn undo(&mut self) {
        let Some(entry) = self.history.pop() else {
            return;
        };

        match &entry {
            HistoryEntry::Move {
                from,
                to,
                cards,
                flipped,
                score_delta,
            } => {
                let split = self.tableau[*to].len() - cards.len();
                let moved = self.tableau[*to].split_off(split);
                if flipped.is_some() {
                    if let Some(card) = self.tableau[*from].last_mut() {
                        card.face_up = false;
                    }
                }
                self.tableau[*from].extend(moved);
                self.moves -= 1;
                self.apply_score_delta(-score_delta);
            }
            HistoryEntry::Deal {
                cards,
                score_delta,
            } => {
                let mut returned = Vec::with_capacity(cards.len());
                for col in (0..cards.len()).rev() {
                    let mut card = self.tableau[col]
                        .pop()
                        .expect("deal entry implies a dealt card per column");
                    card.face_up = false;
                    returned.push(card);
                }
                returned.reverse();
                self.stock.splice(0..0, returned);
                self.deals_remaining = self.stock.len().div_ceil(10);
                self.moves -= 1;
                self.apply_score_delta(-score_delta);
            }
            HistoryEntry::Complete { col, cards, flipped } => {
                if flipped.is_some() {
                    if let Some(card) = self.tableau[*col].last_mut() {
                        card.face_up = false;
                    }
                }
                let kept = self.foundations.cards.len() - cards.len();
                self.foundations.cards.truncate(kept);
                self.tableau[*col].extend(cards.iter().copied());
                self.foundations.completed -= 1;
                self.score -= self.rules.completion_bonus;
            }
        }

        self.redo.push(entry);
    }

    /// Re-applies the most recently undone entry. The entry encodes a
    /// previously-legal transition, so forward effects are replayed
    /// without re-running legality checks.
    pub fn redo(&mut self) {
        let Some(entry) = self.redo.pop() else {
            return;
        };

        match &entry {
            HistoryEntry::Move {
                from,
                to,
                cards,
                flipped,
                score_delta,
            } => {
                let split = self.tableau[*from].len() - cards.len();
                let moved = self.tableau[*from].split_off(split);
                self.tableau[*to].extend(moved);
                if flipped.is_some() {
                    if let Some(card) = self.tableau[*from].last_mut() {
                        card.face_up = true;
                    }
                }
                self.moves += 1;
                self.apply_score_delta(*score_delta);
            }
            HistoryEntry::Deal {
                cards,
                score_delta,
            } => {
                let count = cards.len();
                for (col, mut card) in self.stock.drain(..count).enumerate() {
                    card.face_up = true;
                    self.tableau[col].push(card);
                }
                self.deals_remaining = self.stock.len().div_ceil(10);
                self.moves += 1;
                self.apply_score_delta(*score_delta);
            }
            HistoryEntry::Complete { col, cards, flipped } => {
                let kept = self.tableau[*col].len() - cards.len();
                self.tableau[*col].truncate(kept);
                self.foundations.cards.extend(cards.iter().copied());
                self.foundations.completed += 1;
                if flipped.is_some() {
                    if let Some(card) = self.tableau[*col].last_mut() {
                        card.face_up = true;
                    }
                }
                self.score += self.rules.completion_bonus;
            }
        }

        self.history.push(entry);
    }

    fn apply_score_delta(&mut self, delta: i32) {
        if delta >= 0 {
            self.score += delta as u32;
        } else {
            self.score -= delta.unsigned_abs();
        }
    }
}
