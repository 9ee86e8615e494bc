use super::history::HistoryEntry;
use super::{Card, SpiderGame};

/// Why a stock deal is currently not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealBlock {
    StockEmpty,
    EmptyColumn,
}

impl SpiderGame {
    /// Length of the maximal movable suffix of a column: all face-up,
    /// same suit, strictly descending by one toward the top. An empty
    /// column or a face-down top yields 0; a lone face-up top yields 1.
    pub fn movable_tail_len(&self, col: usize) -> usize {
        let Some(pile) = self.tableau.get(col) else {
            return 0;
        };
        let Some(top) = pile.last() else {
            return 0;
        };
        if !top.face_up {
            return 0;
        }

        let mut len = 1;
        while len < pile.len() {
            let upper = pile[pile.len() - len];
            let lower = pile[pile.len() - len - 1];
            if !lower.face_up || lower.suit != upper.suit || lower.rank != upper.rank + 1 {
                break;
            }
            len += 1;
        }
        len
    }

    pub fn can_move_run(&self, src: usize, start: usize, dst: usize) -> bool {
        if src == dst || src >= self.tableau.len() || dst >= self.tableau.len() {
            return false;
        }

        let source = &self.tableau[src];
        if start >= source.len() || !source[start].face_up {
            return false;
        }

        if !is_descending_run(&source[start..]) {
            return false;
        }

        let head = source[start];
        match self.tableau[dst].last() {
            None => true,
            Some(top) => top.face_up && top.rank == head.rank + 1,
        }
    }

    /// Moves the tail `[start..]` of `src` onto `dst`. Records a history
    /// entry, flips the exposed source card, scores the move, and then
    /// harvests any run completed on either column. Returns false with
    /// no state change when the move is illegal.
    pub fn move_run(&mut self, src: usize, start: usize, dst: usize) -> bool {
        if !self.can_move_run(src, start, dst) {
            return false;
        }

        let moved = self.tableau[src].split_off(start);
        self.tableau[dst].extend(moved.iter().copied());
        let flipped = self.flip_top_if_needed(src);
        let score_delta = self.apply_move_penalty();
        self.moves += 1;
        self.redo.clear();
        self.history.push(HistoryEntry::Move {
            from: src,
            to: dst,
            cards: moved,
            flipped,
            score_delta,
        });

        self.try_complete(dst);
        self.try_complete(src);
        true
    }

    pub fn deal_block(&self) -> Option<DealBlock> {
        if self.stock.is_empty() {
            return Some(DealBlock::StockEmpty);
        }
        if self.tableau.iter().any(Vec::is_empty) {
            return Some(DealBlock::EmptyColumn);
        }
        None
    }

    pub fn can_deal(&self) -> bool {
        self.deal_block().is_none()
    }

    /// Deals one card from the stock front onto each column, left to
    /// right. The final deal hands out whatever remains (fewer than 10)
    /// to the first columns. Counts and scores as a move.
    pub fn deal_row(&mut self) -> bool {
        if self.deal_block().is_some() {
            return false;
        }

        let count = self.stock.len().min(10);
        let mut dealt = Vec::with_capacity(count);
        for (col, mut card) in self.stock.drain(..count).enumerate() {
            card.face_up = true;
            self.tableau[col].push(card);
            dealt.push(card);
        }
        self.deals_remaining = self.stock.len().div_ceil(10);

        let score_delta = self.apply_move_penalty();
        self.moves += 1;
        self.redo.clear();
        self.history.push(HistoryEntry::Deal {
            cards: dealt,
            score_delta,
        });

        for col in 0..self.tableau.len() {
            self.try_complete(col);
        }
        true
    }

    /// Flips the column's top card face-up if it is face-down, returning
    /// the flipped card so the caller can record it for undo.
    pub(super) fn flip_top_if_needed(&mut self, col: usize) -> Option<Card> {
        let card = self.tableau[col].last_mut()?;
        if card.face_up {
            return None;
        }
        card.face_up = true;
        Some(*card)
    }

    /// Applies the per-move penalty, floored at score 0, and returns the
    /// signed delta that actually landed.
    pub(super) fn apply_move_penalty(&mut self) -> i32 {
        let penalty = self.rules.move_penalty.min(self.score);
        self.score -= penalty;
        -(penalty as i32)
    }
}

fn is_descending_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        let a = pair[0];
        let b = pair[1];
        a.face_up && b.face_up && a.suit == b.suit && a.rank == b.rank + 1
    })
}
