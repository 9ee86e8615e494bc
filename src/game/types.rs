use super::history::HistoryEntry;
use super::rank_label;

/// Number of completed same-suit runs that wins the game, in every
/// difficulty and ace configuration (104/13 and 96/12 both come to 8).
pub const RUN_GOAL: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// A single card. Identity is `id`, unique across one deck instance;
/// suit and rank never change after the deck builder creates the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u8,
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    pub fn color_red(&self) -> bool {
        self.suit.is_red()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    One,
    Two,
    Four,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::One, Difficulty::Two, Difficulty::Four];

    pub fn suit_count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    pub fn from_suit_count(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::One => "1-suit",
            Self::Two => "2-suit",
            Self::Four => "4-suit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "1-suit" => Some(Self::One),
            "2-suit" => Some(Self::Two),
            "4-suit" => Some(Self::Four),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::One => "One Suit",
            Self::Two => "Two Suits",
            Self::Four => "Four Suits",
        }
    }

    /// The concrete suits the deck builder repeats to reach 104 cards.
    pub fn suits(self) -> &'static [Suit] {
        match self {
            Self::One => &[Suit::Spades],
            Self::Two => &[Suit::Spades, Suit::Hearts],
            Self::Four => &Suit::ALL,
        }
    }
}

/// Scoring knobs. Kept as one value so the numbers are named in exactly
/// one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRules {
    pub starting: u32,
    pub move_penalty: u32,
    pub completion_bonus: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            starting: 500,
            move_penalty: 1,
            completion_bonus: 100,
        }
    }
}

/// Completed-run counter plus the cards that have left the tableau.
/// The card list is append-only while the game runs; undo is the only
/// thing that takes cards back out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Foundations {
    pub(super) completed: usize,
    pub(super) cards: Vec<Card>,
}

impl Foundations {
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiderGame {
    pub(super) difficulty: Difficulty,
    pub(super) include_aces: bool,
    pub(super) seed: String,
    pub(super) tableau: [Vec<Card>; 10],
    pub(super) stock: Vec<Card>,
    pub(super) foundations: Foundations,
    pub(super) deals_remaining: usize,
    pub(super) moves: u32,
    pub(super) score: u32,
    pub(super) rules: ScoreRules,
    pub(super) history: Vec<HistoryEntry>,
    pub(super) redo: Vec<HistoryEntry>,
}

impl SpiderGame {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn include_aces(&self) -> bool {
        self.include_aces
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn tableau(&self) -> &[Vec<Card>; 10] {
        &self.tableau
    }

    pub fn tableau_card(&self, col: usize, index: usize) -> Option<Card> {
        self.tableau
            .get(col)
            .and_then(|pile| pile.get(index))
            .copied()
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    pub fn deals_remaining(&self) -> usize {
        self.deals_remaining
    }

    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_rules(&self) -> ScoreRules {
        self.rules
    }

    /// Cards in one completed run: 13 with aces, 12 without.
    pub fn run_length(&self) -> usize {
        if self.include_aces {
            13
        } else {
            12
        }
    }

    pub fn deck_size(&self) -> usize {
        if self.include_aces {
            104
        } else {
            96
        }
    }

    pub fn is_won(&self) -> bool {
        self.foundations.completed >= RUN_GOAL
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
impl SpiderGame {
    pub(crate) fn debug_new(
        difficulty: Difficulty,
        include_aces: bool,
        stock: Vec<Card>,
        tableau: [Vec<Card>; 10],
        completed: usize,
    ) -> Self {
        let rules = ScoreRules::default();
        let deals_remaining = stock.len().div_ceil(10);
        Self {
            difficulty,
            include_aces,
            seed: String::new(),
            tableau,
            stock,
            foundations: Foundations {
                completed,
                cards: Vec::new(),
            },
            deals_remaining,
            moves: 0,
            score: rules.starting,
            rules,
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub(crate) fn debug_set_score(&mut self, score: u32) {
        self.score = score;
    }
}
