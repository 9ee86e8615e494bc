use super::SpiderGame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintCandidate {
    pub from: usize,
    pub start: usize,
    pub to: usize,
    pub card_count: usize,
    pub score: u32,
    pub reasons: Vec<&'static str>,
}

impl SpiderGame {
    /// Enumerates every legal tableau move and ranks it. Pure query:
    /// never touches state or history. Best candidates first; ties go
    /// to the move shifting fewer cards.
    pub fn compute_hints(&self) -> Vec<HintCandidate> {
        let mut candidates = Vec::new();

        for src in 0..self.tableau.len() {
            let len = self.tableau[src].len();
            let tail = self.movable_tail_len(src);
            for start in len - tail..len {
                for dst in 0..self.tableau.len() {
                    if !self.can_move_run(src, start, dst) {
                        continue;
                    }
                    candidates.push(self.score_candidate(src, start, dst));
                }
            }
        }

        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.card_count.cmp(&b.card_count))
        });
        candidates
    }

    fn score_candidate(&self, src: usize, start: usize, dst: usize) -> HintCandidate {
        let source = &self.tableau[src];
        let head = source[start];
        let mut score = 0;
        let mut reasons = Vec::new();

        if start > 0 && !source[start - 1].face_up {
            score += 3;
            reasons.push("reveals a face-down card");
        }
        if let Some(top) = self.tableau[dst].last() {
            if top.suit == head.suit && top.rank == head.rank + 1 {
                score += 2;
                reasons.push("extends a same-suit run");
            }
        }
        if start == 0 {
            score += 2;
            reasons.push("empties the source column");
        }

        HintCandidate {
            from: src,
            start,
            to: dst,
            card_count: source.len() - start,
            score,
            reasons,
        }
    }
}
