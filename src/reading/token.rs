use std::fmt;

/// Token for RSVP reading: an ASCII-letter run or a single CJK ideograph.
/// Immutable once produced by the tokenizer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        let token = Token::new("Hello");
        assert_eq!(token.text(), "Hello");
        assert_eq!(Token::new('你'.to_string()).to_string(), "你");
    }

    #[test]
    fn test_token_compares_with_str() {
        assert_eq!(Token::new("cat"), "cat");
        assert_ne!(Token::new("cat"), "Cat");
    }
}
