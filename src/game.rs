pub mod deck;
pub mod hints;
pub mod history;
pub mod inventory;
pub mod moves;
pub mod runs;
pub mod session_codec;
pub mod setup;
pub mod types;


pub use hints::HintCandidate;
pub use history::HistoryEntry;
pub use inventory::{InventoryCounts, InventoryReport};
pub use moves::DealBlock;
pub use types::{Card, Difficulty, Foundations, ScoreRules, SpiderGame, Suit};

pub fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        2..=10 => rank.to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => "?".to_string(),
    }
}
