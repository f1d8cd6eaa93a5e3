//! 单行文本输入

use unicode_width::UnicodeWidthStr;

/// 单行输入框状态，光标以字符（而非字节）计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 光标前文本的显示宽度（CJK 等宽字符占 2 列）
    pub fn cursor_width(&self) -> usize {
        self.value[..self.byte_offset(self.cursor)].width()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// 删除光标前一个字符
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    /// 删除光标处字符
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_edit_multibyte() {
        let mut input = TextInput::new("So Paulo");
        input.move_home();
        input.move_right();
        input.insert('ã');
        assert_eq!(input.value(), "São Paulo");
        assert_eq!(input.cursor(), 2);

        input.backspace();
        assert_eq!(input.value(), "So Paulo");
        input.delete();
        assert_eq!(input.value(), "S Paulo");
    }

    #[test]
    fn cursor_is_clamped() {
        let mut input = TextInput::new("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn cursor_width_counts_columns() {
        let input = TextInput::new("東京 1");
        assert_eq!(input.cursor_width(), 6);
    }
}
