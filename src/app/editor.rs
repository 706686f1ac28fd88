use unicode_segmentation::UnicodeSegmentation;

/// Source text being edited. The cursor always sits at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.insert_str(text);
    }

    pub fn insert(&mut self, c: char) {
        match c {
            '\r' => self.text.push('\n'),
            c if c.is_control() && c != '\n' && c != '\t' => {}
            c => self.text.push(c),
        }
    }

    /// Appends pasted text. CRLF and lone CR line endings become `\n`.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n");
        for c in normalized.chars() {
            self.insert(c);
        }
    }

    /// Removes the last grapheme cluster. Returns whether anything was
    /// removed.
    pub fn backspace(&mut self) -> bool {
        match self.text.grapheme_indices(true).next_back() {
            Some((idx, _)) => {
                self.text.truncate(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
