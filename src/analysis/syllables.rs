//! Heuristic English syllable counter.
//!
//! Counts vowel groups (`y` counts as a vowel) and drops one for a trailing
//! silent `e`. Irregular words will be miscounted; that is accepted.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Approximate syllable count of `word`; always at least 1.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();

    let mut count = match chars.first() {
        Some(&c) if is_vowel(c) => 1,
        _ => 0,
    };
    count += chars
        .windows(2)
        .filter(|pair| is_vowel(pair[1]) && !is_vowel(pair[0]))
        .count();

    if chars.last() == Some(&'e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}
