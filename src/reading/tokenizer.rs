// Tokenizer - splits raw text into ASCII-letter runs and single CJK ideographs

use std::ops::RangeInclusive;

use super::token::Token;

/// CJK Unified Ideographs recognised as standalone tokens.
pub const IDEOGRAPH_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FA5}';

pub fn is_ideograph(c: char) -> bool {
    IDEOGRAPH_RANGE.contains(&c)
}

/// Tokenizes text in a single left-to-right pass.
///
/// A token is either a maximal run of `A-Z`/`a-z` or one ideograph. Every
/// other character is dropped and ends any letter run in progress, so `"a1b"`
/// yields `["a", "b"]`. Input without matches produces an empty vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if c.is_ascii_alphabetic() {
            run_start.get_or_insert(idx);
            continue;
        }

        if let Some(start) = run_start.take() {
            tokens.push(Token::new(&text[start..idx]));
        }
        if is_ideograph(c) {
            tokens.push(Token::new(c.to_string()));
        }
    }

    if let Some(start) = run_start {
        tokens.push(Token::new(&text[start..]));
    }

    tokens
}
