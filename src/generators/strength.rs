// src/generators/strength.rs
use std::collections::HashSet;

// Score a password from 0 to 100
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();

    // Length contribution (up to 40 points)
    let mut score = length.min(40) as u8;

    // Character variety (10 points each)
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Repeated characters
    if password.chars().collect::<HashSet<_>>().len() < length / 2 {
        score = score.saturating_sub(10);
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(analyze_password_strength(""), 0);
    }

    #[test]
    fn test_variety_adds_points() {
        assert_eq!(analyze_password_strength("abcd"), 14);
        assert_eq!(analyze_password_strength("aB3!"), 44);
    }

    #[test]
    fn test_repetition_is_penalized() {
        // 8 chars + lowercase, one distinct character
        assert_eq!(analyze_password_strength("aaaaaaaa"), 8);
    }

    #[test]
    fn test_length_contribution_is_capped() {
        // 40 for length, 40 for variety, minus the repetition penalty
        let long: String = "aB3!xY7#".repeat(20);
        assert_eq!(analyze_password_strength(&long), 70);
    }
}
