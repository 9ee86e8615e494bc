use super::deck::shuffled_deck;
use super::{Difficulty, Foundations, ScoreRules, SpiderGame};

impl SpiderGame {
    /// Deals a fresh game. Columns 0..4 receive 6 cards, columns 4..10
    /// receive 5, only each column's top card face-up; everything left
    /// in the shuffled deck becomes the face-down stock, front first.
    pub fn new_with_seed(difficulty: Difficulty, seed: &str, include_aces: bool) -> Self {
        let deck = shuffled_deck(difficulty, seed, include_aces);
        let rules = ScoreRules::default();

        let mut game = Self {
            difficulty,
            include_aces,
            seed: seed.to_string(),
            tableau: std::array::from_fn(|_| Vec::new()),
            stock: Vec::new(),
            foundations: Foundations::default(),
            deals_remaining: 0,
            moves: 0,
            score: rules.starting,
            rules,
            history: Vec::new(),
            redo: Vec::new(),
        };

        let mut draw = deck.into_iter();
        for col in 0..10 {
            let col_size = if col < 4 { 6 } else { 5 };
            for row in 0..col_size {
                let mut card = draw.next().expect("spider deal consumes 54 cards");
                card.face_up = row == col_size - 1;
                game.tableau[col].push(card);
            }
        }

        game.stock.extend(draw);
        game.deals_remaining = game.stock.len().div_ceil(10);
        game
    }
}
