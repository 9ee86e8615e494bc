/// Seeds are free-form text shared between players; only surrounding
/// whitespace is insignificant.
pub fn normalize_seed_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn random_seed_token() -> String {
    format!("{:08x}", rand::random::<u32>())
}

pub fn seed_from_text_or_random(input: &str) -> String {
    normalize_seed_input(input).unwrap_or_else(random_seed_token)
}
