//! Single-line text input component
//!
//! Owns its buffer and a cursor (as a character index). Scrolls horizontally
//! so the cursor always stays inside the box.

use super::formatters::{char_width, display_width};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TextInput {
    id: ComponentId,
    value: String,
    /// Cursor position in characters (0..=char count)
    cursor: usize,
    placeholder: &'static str,
}

impl TextInput {
    pub fn new(id: ComponentId, placeholder: &'static str) -> Self {
        Self {
            id,
            value: String::new(),
            cursor: 0,
            placeholder,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of a character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a pasted string at the cursor
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Visible part of the value for a box `width` columns wide, and the
    /// cursor's column within it.
    fn visible(&self, width: usize) -> (String, usize) {
        let before: String = self.value.chars().take(self.cursor).collect();
        let before_width = display_width(&before);
        if width == 0 {
            return (String::new(), 0);
        }

        // Drop leading characters until the cursor fits (one column reserved for it)
        let mut skip_width = before_width.saturating_sub(width - 1);
        let mut chars = self.value.chars();
        let mut skipped = 0;
        while skip_width > 0 {
            match chars.next() {
                Some(c) => {
                    let w = char_width(c);
                    skipped += w;
                    skip_width = skip_width.saturating_sub(w);
                }
                None => break,
            }
        }

        let mut shown = String::new();
        let mut shown_width = 0;
        for c in chars {
            let w = char_width(c);
            if shown_width + w > width {
                break;
            }
            shown.push(c);
            shown_width += w;
        }

        (shown, before_width - skipped)
    }
}

impl Component for TextInput {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id);
        let theme = ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused));
        let inner = block.inner(area);

        let (text, cursor_x) = self.visible(inner.width as usize);
        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(theme.muted))
        } else {
            Paragraph::new(text).style(Style::default().fg(theme.foreground))
        };
        f.render_widget(paragraph.block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position(Position::new(inner.x + cursor_x as u16, inner.y));
        }
    }
}

impl Interactive for TextInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Handled::No;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.backspace();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.delete();
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type/paste code  ←→:move  Enter:convert")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn input() -> TextInput {
        TextInput::new(ComponentId::CodeInput, "Enter your bet slip code")
    }

    #[test]
    fn typing_and_editing() {
        let mut input = input();
        for c in "ABC123".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "ABC123");

        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ABC12");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "BC12");

        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "BxC12");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn edges_are_safe() {
        let mut input = input();
        assert!(!input.backspace());
        assert!(!input.delete());
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.cursor, 0);
        input.handle_key(key(KeyCode::End));
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn multibyte_characters_edit_cleanly() {
        let mut input = input();
        input.insert_str("é日x");
        assert_eq!(input.cursor, 3);
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "éx");
    }

    #[test]
    fn whitespace_is_kept() {
        let mut input = input();
        input.handle_key(key(KeyCode::Char(' ')));
        input.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(input.value(), "  ");
    }

    #[test]
    fn control_chords_bubble_up() {
        let mut input = input();
        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_y), Handled::No);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn long_values_scroll_to_keep_cursor_visible() {
        let mut input = input();
        input.insert_str("ABCDEFGHIJ");

        let (shown, cursor_x) = input.visible(5);
        assert_eq!(shown, "GHIJ");
        assert_eq!(cursor_x, 4);

        input.cursor = 0;
        let (shown, cursor_x) = input.visible(5);
        assert_eq!(shown, "ABCDE");
        assert_eq!(cursor_x, 0);
    }
}
