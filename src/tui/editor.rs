use std::iter::once;

/// Single line text input, cursor counted in chars.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Editor {
    cursor_position: usize,
    s: String,
}

impl Editor {
    pub fn with_value(s: impl Into<String>) -> Self {
        let s = s.into();
        Self {
            cursor_position: s.chars().count(),
            s,
        }
    }

    fn len(&self) -> usize {
        self.s.chars().count()
    }

    pub fn set_value(&mut self, s: impl Into<String>) {
        *self = Self::with_value(s);
    }

    pub fn clear(&mut self) {
        self.set_value(String::new());
    }

    pub fn insert_char(&mut self, c: char) {
        let before = self.s.chars().take(self.cursor_position);
        let after = self.s.chars().skip(self.cursor_position);
        self.s = before.chain(once(c)).chain(after).collect();
        self.cursor_position += 1;
    }

    pub fn delete_left(&mut self) {
        if self.cursor_position > 0 {
            let before = self.s.chars().take(self.cursor_position - 1);
            let after = self.s.chars().skip(self.cursor_position);
            self.s = before.chain(after).collect();
            self.cursor_position -= 1;
        }
    }

    pub fn delete_right(&mut self) {
        if self.cursor_position < self.len() {
            let before = self.s.chars().take(self.cursor_position);
            let after = self.s.chars().skip(self.cursor_position + 1);
            self.s = before.chain(after).collect();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor_position = self.len();
    }

    pub fn value(&self) -> &str {
        &self.s
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_the_cursor() {
        let mut editor = Editor::with_value("Rya");
        editor.move_left();
        editor.move_left();
        editor.insert_char('i');
        assert_eq!(editor.value(), "Riya");
        assert_eq!(editor.cursor_position(), 2);
    }

    #[test]
    fn deletes_on_both_sides() {
        let mut editor = Editor::with_value("1200");
        editor.delete_left();
        assert_eq!(editor.value(), "120");
        editor.move_to_start();
        editor.delete_right();
        assert_eq!(editor.value(), "20");
        editor.move_to_end();
        editor.delete_right();
        assert_eq!(editor.value(), "20");
        editor.move_to_start();
        editor.delete_left();
        assert_eq!(editor.value(), "20");
    }

    #[test]
    fn handles_multibyte_chars() {
        let mut editor = Editor::default();
        for c in "₹50".chars() {
            editor.insert_char(c);
        }
        assert_eq!(editor.cursor_position(), 3);
        editor.move_to_start();
        editor.move_right();
        editor.delete_left();
        assert_eq!(editor.value(), "50");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut editor = Editor::with_value("ab");
        editor.move_right();
        assert_eq!(editor.cursor_position(), 2);
        editor.clear();
        editor.move_left();
        assert_eq!(editor.cursor_position(), 0);
        assert_eq!(editor.value(), "");
    }
}
