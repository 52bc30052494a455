//! Sentence and word segmentation (Unicode UAX #29).
//!
//! Two adjustments bring the counts in line with a punkt-style tokenizer:
//! line breaks do not end sentences, and English clitics are split off their
//! word (`company's` → `company` `'s`, `didn't` → `did` `n't`).

use super::lexicon::StopWords;
use unicode_segmentation::UnicodeSegmentation;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Clitics split off after an apostrophe; `n't` is handled separately.
const CLITICS: [&str; 6] = ["s", "m", "d", "ll", "re", "ve"];

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Sentences that contain at least one letter or digit.
///
/// Only sentence punctuation ends a sentence: a title line followed by a body
/// paragraph is one sentence unless the title ends in `.`, `!` or `?`.
pub fn sentences(text: &str) -> Vec<String> {
    let flat: String = text
        .chars()
        .map(|c| if is_line_break(c) { ' ' } else { c })
        .collect();
    flat.unicode_sentences().map(str::to_string).collect()
}

/// Word tokens, punctuation and clitics included, whitespace dropped.
///
/// `"Hello, world."` gives `["Hello", ",", "world", "."]`.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|token| !token.chars().all(char::is_whitespace))
        .flat_map(|token| {
            let (head, clitic) = split_clitic(token);
            std::iter::once(head).chain(clitic)
        })
        .collect()
}

/// Split `didn't` into `did` + `n't` and `company's` into `company` + `'s`.
fn split_clitic(token: &str) -> (&str, Option<&str>) {
    let Some(pos) = token.rfind(APOSTROPHES) else {
        return (token, None);
    };
    let apostrophe_len = token[pos..].chars().next().map_or(1, char::len_utf8);
    let rest = &token[pos + apostrophe_len..];

    if rest.eq_ignore_ascii_case("t") && pos > 1 && token[..pos].ends_with(['n', 'N']) {
        let split = pos - 1;
        return (&token[..split], Some(&token[split..]));
    }
    if pos > 0 && CLITICS.iter().any(|c| rest.eq_ignore_ascii_case(c)) {
        return (&token[..pos], Some(&token[pos..]));
    }
    (token, None)
}

pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Alphabetic tokens, lowercased, minus stop words.
pub fn clean_words(tokens: &[&str], stop_words: &StopWords) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| is_alphabetic(token))
        .map(|token| token.to_lowercase())
        .filter(|word| !stop_words.contains(word))
        .collect()
}
