use std::fmt;

/// Cut `text` to at most `max_len` bytes without splitting a character
pub fn truncate_to_boundary(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

/// Round a percentage to the nearest whole number for display
pub fn round_percent(percent: f64) -> i64 {
    (percent + 0.5).floor() as i64
}

/// Fixed-capacity text buffer.
///
/// Writes past the capacity are cut at the last whole character that fits
/// and every later write is dropped; the buffer never grows beyond
/// `capacity` bytes.
#[derive(Debug, Clone)]
pub struct BoundedBuffer {
    text: String,
    capacity: usize,
    truncated: bool,
}

impl BoundedBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
            truncated: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.text.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }

    /// Append as much of `s` as fits
    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        if s.len() <= self.remaining() {
            self.text.push_str(s);
            return;
        }

        let mut end = self.remaining();
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&s[..end]);
        self.truncated = true;
    }
}

impl fmt::Write for BoundedBuffer {
    /// Never fails: overflow is absorbed by truncation
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
