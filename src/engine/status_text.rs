use crate::game::types::RUN_GOAL;
use crate::game::DealBlock;

pub fn msg_started_seed(seed: &str) -> String {
    format!("Started a new game. Seed {seed}.")
}

pub fn msg_deal_blocked(block: DealBlock) -> String {
    match block {
        DealBlock::StockEmpty => "No cards left in the stock.".to_string(),
        DealBlock::EmptyColumn => "Fill every empty column before dealing.".to_string(),
    }
}

pub fn msg_illegal_move() -> String {
    "That move is not allowed.".to_string()
}

pub fn msg_run_completed(completed: usize) -> String {
    format!("Run complete! {completed} of {RUN_GOAL} done.")
}

pub fn msg_won(move_count: u32, score: u32) -> String {
    format!("You won in {move_count} moves with a score of {score}!")
}

pub fn msg_session_restored(seed: &str) -> String {
    format!("Restored the saved game. Seed {seed}.")
}
