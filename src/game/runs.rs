use super::history::HistoryEntry;
use super::{Card, SpiderGame};

impl SpiderGame {
    /// Harvests every completed run sitting on top of a column. Loops
    /// because removing one run can expose another complete one.
    pub(super) fn try_complete(&mut self, col: usize) {
        while self.remove_completed_run(col) {}
    }

    fn remove_completed_run(&mut self, col: usize) -> bool {
        let run_length = self.run_length();
        if !has_completed_run(&self.tableau[col], run_length, self.include_aces) {
            return false;
        }

        let new_len = self.tableau[col].len() - run_length;
        let removed = self.tableau[col].split_off(new_len);
        let flipped = self.flip_top_if_needed(col);
        self.foundations.completed += 1;
        self.foundations.cards.extend(removed.iter().copied());
        self.score += self.rules.completion_bonus;
        self.history.push(HistoryEntry::Complete {
            col,
            cards: removed,
            flipped,
        });
        true
    }
}

/// A complete run is the column's top `run_length` cards forming one
/// face-up, same-suit, descending-by-one chain with a King at the
/// bottom. The low end must be the Ace (with aces) or the 2 (without);
/// checking both extremes keeps a wrong-range window of coincidental
/// length from passing.
fn has_completed_run(pile: &[Card], run_length: usize, include_aces: bool) -> bool {
    if pile.len() < run_length {
        return false;
    }

    let run = &pile[pile.len() - run_length..];
    let Some(first) = run.first().copied() else {
        return false;
    };
    if first.rank != 13 || !first.face_up {
        return false;
    }

    let chained = run.windows(2).all(|pair| {
        let a = pair[0];
        let b = pair[1];
        a.face_up && b.face_up && a.suit == b.suit && a.rank == b.rank + 1
    });
    let low_rank = if include_aces { 1 } else { 2 };
    chained && run.last().is_some_and(|card| card.rank == low_rank)
}
