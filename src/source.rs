use std::fs;
use std::io;
use std::path::Path;

/// Read-only character buffer handed to the scanner.
pub struct Source {
    content: Vec<char>,
}

impl Source {
    pub fn load<P: AsRef<Path>>(file: P) -> io::Result<Self> {
        let content = fs::read_to_string(file)?;
        Ok(Source::text(&content))
    }

    pub fn text(text: &str) -> Self {
        Source {
            content: text.chars().collect(),
        }
    }

    /// The character at `index`, or `None` past the end of the buffer.
    pub fn character(&self, index: usize) -> Option<char> {
        self.content.get(index).copied()
    }

    pub fn length(&self) -> usize {
        self.content.len()
    }

    pub fn lexeme(&self, start: usize, end: usize) -> String {
        self.content[start..end].iter().collect()
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::text(text)
    }
}
