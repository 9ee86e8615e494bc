use std::collections::HashMap;

use super::types::RUN_GOAL;
use super::{Card, Difficulty, Foundations, ScoreRules, SpiderGame, Suit};

impl SpiderGame {
    /// Point-in-time snapshot of the whole game state as one line of
    /// `key=value` parts. History is deliberately not captured; a
    /// restored game starts with empty undo/redo stacks.
    pub fn encode_for_session(&self) -> String {
        let mut parts = vec![
            format!("diff={}", self.difficulty.suit_count()),
            format!("aces={}", if self.include_aces { 1 } else { 0 }),
            format!("seed={}", self.seed),
            format!("moves={}", self.moves),
            format!("score={}", self.score),
            format!("deals={}", self.deals_remaining),
            format!("done={}", self.foundations.completed),
            format!("stock={}", encode_pile(&self.stock)),
            format!("found={}", encode_pile(&self.foundations.cards)),
        ];
        for (col, pile) in self.tableau.iter().enumerate() {
            parts.push(format!("t{col}={}", encode_pile(pile)));
        }
        parts.join(";")
    }

    /// Rebuilds a game from a snapshot. Any malformed or inconsistent
    /// payload yields None; the caller treats that as no saved game.
    pub fn decode_from_session(data: &str) -> Option<Self> {
        let mut fields = HashMap::<&str, &str>::new();
        for part in data.split(';') {
            let (key, value) = part.split_once('=')?;
            fields.insert(key, value);
        }

        let difficulty = Difficulty::from_suit_count(fields.get("diff")?.parse::<u8>().ok()?)?;
        let include_aces = match *fields.get("aces")? {
            "1" => true,
            "0" => false,
            _ => return None,
        };
        let seed = (*fields.get("seed")?).to_string();
        let moves = fields.get("moves")?.parse::<u32>().ok()?;
        let score = fields.get("score")?.parse::<u32>().ok()?;
        let deals_remaining = fields.get("deals")?.parse::<usize>().ok()?;
        let completed = fields.get("done")?.parse::<usize>().ok()?;
        if completed > RUN_GOAL {
            return None;
        }

        let stock = decode_pile(fields.get("stock")?)?;
        let found = decode_pile(fields.get("found")?)?;
        let mut tableau: [Vec<Card>; 10] = std::array::from_fn(|_| Vec::new());
        for (col, pile) in tableau.iter_mut().enumerate() {
            let key = format!("t{col}");
            *pile = decode_pile(fields.get(key.as_str())?)?;
        }

        let run_length = if include_aces { 13 } else { 12 };
        let deck_size = if include_aces { 104 } else { 96 };
        let tableau_count: usize = tableau.iter().map(Vec::len).sum();
        if stock.len() + tableau_count + found.len() != deck_size {
            return None;
        }
        if completed * run_length != found.len() {
            return None;
        }
        if deals_remaining != stock.len().div_ceil(10) {
            return None;
        }

        Some(Self {
            difficulty,
            include_aces,
            seed,
            tableau,
            stock,
            foundations: Foundations {
                completed,
                cards: found,
            },
            deals_remaining,
            moves,
            score,
            rules: ScoreRules::default(),
            history: Vec::new(),
            redo: Vec::new(),
        })
    }
}

fn encode_pile(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(|card| {
            let suit = match card.suit {
                Suit::Clubs => 'C',
                Suit::Diamonds => 'D',
                Suit::Hearts => 'H',
                Suit::Spades => 'S',
            };
            let face = if card.face_up { 'U' } else { 'D' };
            format!("{}:{suit}{}{face}", card.id, card.rank)
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn decode_pile(encoded: &str) -> Option<Vec<Card>> {
    if encoded == "-" {
        return Some(Vec::new());
    }
    let mut cards = Vec::new();
    for token in encoded.split('.') {
        let (id_raw, body) = token.split_once(':')?;
        let id = id_raw.parse::<u8>().ok()?;
        let mut chars = body.chars();
        let suit = match chars.next()? {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return None,
        };
        let face = match body.chars().last()? {
            'U' => true,
            'D' => false,
            _ => return None,
        };
        if body.len() < 3 {
            return None;
        }
        let rank_raw = &body[1..body.len() - 1];
        let rank = rank_raw.parse::<u8>().ok()?;
        if !(1..=13).contains(&rank) {
            return None;
        }
        cards.push(Card {
            id,
            suit,
            rank,
            face_up: face,
        });
    }
    Some(cards)
}
