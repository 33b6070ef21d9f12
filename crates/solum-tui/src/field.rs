//! Minimal single-line text field for form input.
//!
//! Supports the subset of editing operations the sign-in form needs. The
//! cursor is tracked in char units; all byte offsets are derived locally.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Forward,
    Back,
    Head,
    End,
}

/// Single-line text buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    /// Returns the field contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor position in char units.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a string at the cursor, advancing the cursor. Newlines are
    /// rejected; this is a single-line field.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() || text.contains('\n') {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, text);
        self.cursor += text.chars().count();
    }

    /// Inserts a single character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Deletes the character at the cursor (Delete key semantics).
    pub fn delete_next_char(&mut self) {
        if self.cursor >= char_len(&self.text) {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Deletes the character before the cursor (Backspace semantics).
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the word immediately to the left of the cursor.
    pub fn delete_word_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let target = scan_left_segment(&chars, self.cursor.min(chars.len()));
        let start = char_to_byte_index(&self.text, target);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = target;
    }

    /// Clears the field and resets the cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Moves the cursor according to a movement command.
    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Forward => {
                if self.cursor < char_len(&self.text) {
                    self.cursor += 1;
                }
            }
            CursorMove::Back => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            CursorMove::Head => self.cursor = 0,
            CursorMove::End => self.cursor = char_len(&self.text),
        }
    }

    /// Handles a key input for basic editing.
    pub fn input(&mut self, key: KeyEvent) {
        if matches!(key.kind, KeyEventKind::Release) {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char(ch) if !ctrl && !alt => self.insert_char(ch),
            KeyCode::Backspace if alt => self.delete_word_left(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_cursor(CursorMove::Back),
            KeyCode::Right => self.move_cursor(CursorMove::Forward),
            KeyCode::Home => self.move_cursor(CursorMove::Head),
            KeyCode::End => self.move_cursor(CursorMove::End),
            _ => {}
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn char_to_byte_index(text: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    text.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Returns true if the character is a word character (alphanumeric or
/// underscore). Punctuation and whitespace are word boundaries.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn scan_left_segment(chars: &[char], mut idx: usize) -> usize {
    if idx == 0 {
        return 0;
    }
    let class = char_class(chars[idx - 1]);
    while idx > 0 && char_class(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}
