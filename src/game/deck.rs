use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Card, Difficulty};

/// The seed text fed to the hash. Order- and case-sensitive: the same
/// seed on a different difficulty is a different shuffle.
pub fn seed_material(difficulty: Difficulty, seed: &str) -> String {
    format!("{}:{}", difficulty.id(), seed)
}

/// 32-bit FNV-1a over the combined seed text.
pub fn hash_seed(material: &str) -> u32 {
    let mut hash = 0x811c_9dc5_u32;
    for byte in material.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

pub fn shuffle_rng(difficulty: Difficulty, seed: &str) -> StdRng {
    StdRng::seed_from_u64(u64::from(hash_seed(&seed_material(difficulty, seed))))
}

/// Builds the unshuffled 104-card multiset for a difficulty, ids assigned
/// sequentially from 0. Removing aces afterwards leaves 96 cards whose
/// ids keep their original values, so ids stay unique but not contiguous.
pub fn build_deck(difficulty: Difficulty, include_aces: bool) -> Vec<Card> {
    let suits = difficulty.suits();
    let copies = 8 / suits.len();

    let mut deck = Vec::with_capacity(104);
    let mut next_id = 0_u8;
    for _ in 0..copies {
        for &suit in suits {
            for rank in 1..=13 {
                deck.push(Card {
                    id: next_id,
                    suit,
                    rank,
                    face_up: false,
                });
                next_id += 1;
            }
        }
    }

    if !include_aces {
        deck.retain(|card| card.rank != 1);
    }
    deck
}

pub fn shuffled_deck(difficulty: Difficulty, seed: &str, include_aces: bool) -> Vec<Card> {
    let mut deck = build_deck(difficulty, include_aces);
    let mut rng = shuffle_rng(difficulty, seed);
    deck.shuffle(&mut rng);
    deck
}
