//! # InputField
//!
//! A single editable line of text with a cursor, a focus flag and a
//! character limit. The leaf of the form model.
//!
//! Every operation clamps instead of failing: characters typed past
//! `max_length` are dropped, cursor movement stops at either end, and
//! deleting at a boundary does nothing.
//!
//! The cursor is stored as a byte offset into `value` (always on a char
//! boundary) and reported to callers as a char column.

/// Cursor movement inside a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    value: String,
    /// Cursor position as byte offset in value (0..=value.len())
    pos: usize,
    focused: bool,
    max_length: usize,
    placeholder: String,
}

impl InputField {
    /// Create an empty, blurred field. A `max_length` of zero is raised to one.
    pub fn new(placeholder: impl Into<String>, max_length: usize) -> Self {
        Self {
            value: String::new(),
            pos: 0,
            focused: false,
            max_length: max_length.max(1),
            placeholder: placeholder.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor column in chars (0..=len()).
    pub fn cursor(&self) -> usize {
        self.value[..self.pos].chars().count()
    }

    /// Length of the value in chars.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Insert `c` at the cursor. Dropped silently when the field is full.
    ///
    /// Returns `true` if the value changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.len() >= self.max_length {
            return false;
        }
        self.value.insert(self.pos, c);
        self.pos += c.len_utf8();
        true
    }

    /// Insert each char of `text` in turn, stopping once the field is full.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let mut changed = false;
        for c in text.chars().filter(|c| !c.is_control()) {
            if !self.insert_char(c) {
                break;
            }
            changed = true;
        }
        changed
    }

    /// Remove the char before the cursor. No-op at column 0.
    pub fn delete_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        let prev = prev_char_boundary(&self.value, self.pos);
        self.value.drain(prev..self.pos);
        self.pos = prev;
        true
    }

    /// Remove the char under the cursor. No-op at the end of the value.
    pub fn delete_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        let next = next_char_boundary(&self.value, self.pos);
        self.value.drain(self.pos..next);
        true
    }

    /// Move the cursor. Returns `true` if it moved.
    pub fn move_cursor(&mut self, movement: CursorMove) -> bool {
        let target = match movement {
            CursorMove::Left => prev_char_boundary(&self.value, self.pos),
            CursorMove::Right => next_char_boundary(&self.value, self.pos),
            CursorMove::Home => 0,
            CursorMove::End => self.value.len(),
        };
        let moved = target != self.pos;
        self.pos = target;
        moved
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Clear the value and put the cursor at 0. Focus is left alone.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }
}

/// Byte offset of the char boundary before `pos` (0 at the start).
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the char boundary after `pos` (`text.len()` at the end).
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(text: &str, max_length: usize) -> InputField {
        let mut field = InputField::new("Title", max_length);
        field.insert_str(text);
        field
    }

    #[test]
    fn test_new_field_is_empty_and_blurred() {
        let field = InputField::new("Title", 32);
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
        assert!(!field.is_focused());
        assert_eq!(field.placeholder(), "Title");
        assert_eq!(field.max_length(), 32);
    }

    #[test]
    fn test_zero_max_length_is_raised_to_one() {
        let mut field = InputField::new("", 0);
        assert_eq!(field.max_length(), 1);
        assert!(field.insert_char('a'));
        assert!(!field.insert_char('b'));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut field = field_with("ace", 32);
        field.move_cursor(CursorMove::Left);
        field.move_cursor(CursorMove::Left);
        assert!(field.insert_char('b'));
        assert_eq!(field.value(), "abce");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_insert_past_capacity_is_dropped() {
        let mut field = field_with("abc", 3);
        assert!(!field.insert_char('d'));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_insert_str_stops_when_full() {
        let mut field = InputField::new("", 4);
        assert!(field.insert_str("Dune Messiah"));
        assert_eq!(field.value(), "Dune");
    }

    #[test]
    fn test_insert_str_skips_control_chars() {
        let mut field = InputField::new("", 32);
        field.insert_str("Du\nne");
        assert_eq!(field.value(), "Dune");
    }

    #[test]
    fn test_capacity_counts_chars_not_bytes() {
        let mut field = InputField::new("", 3);
        field.insert_str("éèê");
        assert_eq!(field.value(), "éèê");
        assert_eq!(field.len(), 3);
        assert_eq!(field.cursor(), 3);
        assert!(!field.insert_char('a'));
    }

    #[test]
    fn test_delete_backward() {
        let mut field = field_with("héllo", 32);
        field.move_cursor(CursorMove::Home);
        assert!(!field.delete_backward(), "no-op at column 0");
        field.move_cursor(CursorMove::Right);
        field.move_cursor(CursorMove::Right);
        assert!(field.delete_backward());
        assert_eq!(field.value(), "hllo");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_delete_forward() {
        let mut field = field_with("ab", 32);
        assert!(!field.delete_forward(), "no-op at end");
        field.move_cursor(CursorMove::Home);
        assert!(field.delete_forward());
        assert_eq!(field.value(), "b");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamps_at_bounds() {
        let mut field = field_with("ab", 32);
        assert!(!field.move_cursor(CursorMove::Right));
        assert!(!field.move_cursor(CursorMove::End));
        assert!(field.move_cursor(CursorMove::Home));
        assert!(!field.move_cursor(CursorMove::Left));
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_focus_and_blur_are_idempotent() {
        let mut field = InputField::new("", 8);
        field.focus();
        field.focus();
        assert!(field.is_focused());
        field.blur();
        field.blur();
        assert!(!field.is_focused());
    }

    #[test]
    fn test_reset_keeps_focus() {
        let mut field = field_with("Dune", 32);
        field.focus();
        field.reset();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
        assert!(field.is_focused());
    }
}
