//! The bet slip conversion form, rendered as a centered card
//!
//! Owns the [`SlipForm`] state machine plus the widgets that edit it. Key
//! events are routed to whichever control has focus; the card keeps the
//! form's source code in sync with the text input after every edit.

use super::formatters::{break_anywhere, wrap_words};
use super::text_input::TextInput;
use crate::converter::{ClipboardWriter, SlipForm, SubmitOutcome};
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub const TITLE: &str = "Bet Slip Converter";
const CODE_LABEL: &str = "Bet Slip Code";
const CODE_PLACEHOLDER: &str = "Enter your bet slip code";
const TARGET_LABEL: &str = "Target Company";
const TARGET_PLACEHOLDER: &str = "Select target betting company";
const RESULT_LABEL: &str = "Converted Code";
const COPY_LABEL: &str = "Copy to Clipboard";

/// One vertical slice of the card body
enum Section {
    Title,
    Subtitle(Vec<String>),
    Gap,
    Label(&'static str),
    CodeInput,
    TargetSelect,
    SubmitButton,
    Result(Vec<String>),
    CopyButton,
}

impl Section {
    fn height(&self) -> u16 {
        match self {
            Section::Title | Section::Gap | Section::Label(_) => 1,
            Section::SubmitButton | Section::CopyButton => 1,
            Section::CodeInput | Section::TargetSelect => 3,
            Section::Subtitle(rows) => row_count(rows),
            Section::Result(rows) => row_count(rows).saturating_add(2),
        }
    }
}

fn row_count(rows: &[String]) -> u16 {
    u16::try_from(rows.len()).unwrap_or(u16::MAX)
}

pub struct FormCard {
    form: SlipForm,
    code_input: TextInput,
    focus: ComponentId,
    clipboard: Box<dyn ClipboardWriter>,
}

impl FormCard {
    pub fn new(form: SlipForm, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            form,
            code_input: TextInput::new(ComponentId::CodeInput, CODE_PLACEHOLDER),
            focus: ComponentId::CodeInput,
            clipboard,
        }
    }

    pub fn form(&self) -> &SlipForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SlipForm {
        &mut self.form
    }

    pub fn focus(&self) -> ComponentId {
        self.focus
    }

    /// Controls in tab order. The selector and result panel only take part
    /// when they are on screen.
    fn focus_order(&self) -> Vec<ComponentId> {
        let mut order = vec![ComponentId::CodeInput];
        if self.form.config().show_target_selector {
            order.push(ComponentId::TargetSelect);
        }
        order.push(ComponentId::SubmitButton);
        if self.form.has_result() {
            order.push(ComponentId::ResultPanel);
        }
        order
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let len = order.len();
        let next = match order.iter().position(|id| *id == self.focus) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.focus = order[next];
    }

    /// Insert pasted text into the code field
    pub fn paste(&mut self, text: &str) {
        // Terminals deliver multi-line pastes verbatim; a slip code is one line
        let line: String = text.chars().filter(|c| !c.is_control()).collect();
        self.code_input.insert_str(&line);
        self.form.set_source_code(self.code_input.value());
        self.focus = ComponentId::CodeInput;
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    /// Copy the converted code, if any
    pub fn copy(&self) -> bool {
        self.form.copy_result(self.clipboard.as_ref())
    }

    /// Total rows the card wants at the given width (borders included)
    pub fn required_height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(4);
        self.sections(inner_width)
            .iter()
            .map(Section::height)
            .fold(2, u16::saturating_add)
    }

    fn sections(&self, width: u16) -> Vec<Section> {
        let width = width as usize;
        let mut sections = vec![
            Section::Title,
            Section::Subtitle(wrap_words(&self.form.config().subtitle(), width)),
            Section::Gap,
            Section::Label(CODE_LABEL),
            Section::CodeInput,
        ];
        if self.form.config().show_target_selector {
            sections.push(Section::Label(TARGET_LABEL));
            sections.push(Section::TargetSelect);
        }
        sections.push(Section::Gap);
        sections.push(Section::SubmitButton);

        if self.form.has_result() {
            sections.push(Section::Gap);
            sections.push(Section::Label(RESULT_LABEL));
            sections.push(Section::Result(break_anywhere(
                self.form.result(),
                width.saturating_sub(2),
            )));
            sections.push(Section::CopyButton);
        }
        sections
    }

    fn render_section(&self, f: &mut Frame, area: Rect, section: &Section, ctx: &RenderContext) {
        let theme = ctx.theme;
        match section {
            Section::Gap => {}
            Section::Title => {
                let title = Paragraph::new(TITLE)
                    .alignment(Alignment::Center)
                    .style(
                        Style::default()
                            .fg(theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    );
                f.render_widget(title, area);
            }
            Section::Subtitle(rows) => {
                let lines: Vec<Line> = rows.iter().map(|r| Line::from(r.as_str())).collect();
                let subtitle = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted));
                f.render_widget(subtitle, area);
            }
            Section::Label(text) => {
                let label = Paragraph::new(*text).style(
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                );
                f.render_widget(label, area);
            }
            Section::CodeInput => self.code_input.render(f, area, ctx),
            Section::TargetSelect => self.render_selector(f, area, ctx),
            Section::SubmitButton => {
                let focused = ctx.is_focused(ComponentId::SubmitButton);
                let text = if self.form.is_busy() {
                    format!("{} {}", ctx.spinner_char(), self.form.submit_label())
                } else {
                    self.form.submit_label().to_string()
                };
                let button = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(theme.button_style(focused, self.form.can_submit()));
                f.render_widget(button, area);
            }
            Section::Result(rows) => {
                let focused = ctx.is_focused(ComponentId::ResultPanel);
                let lines: Vec<Line> = rows
                    .iter()
                    .map(|r| {
                        Line::from(Span::styled(
                            r.as_str(),
                            Style::default().fg(theme.code).add_modifier(Modifier::BOLD),
                        ))
                    })
                    .collect();
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.border_style(focused));
                f.render_widget(Paragraph::new(lines).block(block), area);
            }
            Section::CopyButton => {
                let focused = ctx.is_focused(ComponentId::ResultPanel);
                let style = if focused {
                    Style::default()
                        .fg(theme.primary_fg)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.primary)
                };
                let button = Paragraph::new(COPY_LABEL)
                    .alignment(Alignment::Center)
                    .style(style);
                f.render_widget(button, area);
            }
        }
    }

    fn render_selector(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(ComponentId::TargetSelect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let selected = match self.form.target() {
            Some(bookmaker) => Span::styled(bookmaker.name, Style::default().fg(theme.foreground)),
            None => Span::styled(TARGET_PLACEHOLDER, Style::default().fg(theme.muted)),
        };
        f.render_widget(Paragraph::new(Line::from(selected)), inner);

        let arrow_color = if focused { theme.highlight } else { theme.muted };
        let arrows = Paragraph::new("▲▼")
            .alignment(Alignment::Right)
            .style(Style::default().fg(arrow_color));
        f.render_widget(arrows, inner);
    }
}

impl Component for FormCard {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.card))
            .padding(Padding::horizontal(1));
        let inner = card.inner(area);
        f.render_widget(card, area);

        let sections = self.sections(inner.width);
        let constraints: Vec<Constraint> = sections
            .iter()
            .map(|s| Constraint::Length(s.height()))
            .collect();
        let areas = Layout::vertical(constraints).split(inner);

        for (section, rect) in sections.iter().zip(areas.iter()) {
            self.render_section(f, *rect, section, ctx);
        }
    }
}

impl Interactive for FormCard {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return Handled::Yes;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return Handled::Yes;
            }
            _ => {}
        }

        match self.focus {
            ComponentId::CodeInput => {
                if key.code == KeyCode::Enter {
                    self.submit();
                    return Handled::Yes;
                }
                let handled = self.code_input.handle_key(key);
                if handled.was_handled() {
                    self.form.set_source_code(self.code_input.value());
                }
                handled
            }
            ComponentId::TargetSelect => match key.code {
                KeyCode::Up | KeyCode::Left => {
                    self.form.cycle_target(false);
                    Handled::Yes
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
                    self.form.cycle_target(true);
                    Handled::Yes
                }
                KeyCode::Enter => {
                    self.submit();
                    Handled::Yes
                }
                _ => Handled::No,
            },
            ComponentId::SubmitButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.submit();
                    Handled::Yes
                }
                _ => Handled::No,
            },
            ComponentId::ResultPanel => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Handled::from(self.copy()),
                _ => Handled::No,
            },
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            ComponentId::CodeInput => self.code_input.focus_hint(),
            ComponentId::TargetSelect => Some("↑↓:choose bookmaker  Enter:convert"),
            ComponentId::SubmitButton => Some("Enter:convert"),
            ComponentId::ResultPanel => Some("Enter:copy"),
        }
    }
}

impl Copyable for FormCard {
    fn copy_text(&self) -> Option<String> {
        self.form
            .has_result()
            .then(|| self.form.result().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{Completion, FormConfig, Notification, Notifier};
    use crate::tui::theme::Theme;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    impl Recorder {
        fn titles(&self) -> Vec<String> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .map(|n| n.title.clone())
                .collect()
        }
    }

    #[derive(Clone, Default)]
    struct SharedClipboard(Arc<Mutex<Option<String>>>);

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&self, text: &str) -> anyhow::Result<()> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn card(
        config: FormConfig,
    ) -> (
        FormCard,
        Arc<Recorder>,
        SharedClipboard,
        mpsc::Receiver<Completion>,
    ) {
        let notifier = Arc::new(Recorder::default());
        let clipboard = SharedClipboard::default();
        let (tx, rx) = mpsc::channel(4);
        let form = SlipForm::new(config, notifier.clone(), tx);
        let card = FormCard::new(form, Box::new(clipboard.clone()));
        (card, notifier, clipboard, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(card: &mut FormCard, text: &str) {
        for c in text.chars() {
            card.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn tab_order_includes_selector_only_when_shown() {
        let (mut generic, _, _, _rx) = card(FormConfig::generic());
        assert_eq!(generic.focus(), ComponentId::CodeInput);
        generic.focus_next();
        assert_eq!(generic.focus(), ComponentId::TargetSelect);
        generic.focus_next();
        assert_eq!(generic.focus(), ComponentId::SubmitButton);
        generic.focus_next();
        assert_eq!(generic.focus(), ComponentId::CodeInput);

        let (mut fixed, _, _, _rx) = card(FormConfig::fixed_target(crate::catalog::BETPAWA));
        fixed.focus_next();
        assert_eq!(fixed.focus(), ComponentId::SubmitButton);
        fixed.focus_prev();
        assert_eq!(fixed.focus(), ComponentId::CodeInput);
    }

    #[test]
    fn typing_updates_the_form() {
        let (mut card, _, _, _rx) = card(FormConfig::generic());
        type_text(&mut card, "AB12");
        card.handle_key(key(KeyCode::Backspace));
        assert_eq!(card.form().source_code(), "AB1");
    }

    #[test]
    fn paste_strips_newlines() {
        let (mut card, _, _, _rx) = card(FormConfig::generic());
        card.focus_next();
        card.paste("XYZ\r\n");
        assert_eq!(card.form().source_code(), "XYZ");
        assert_eq!(card.focus(), ComponentId::CodeInput);
    }

    #[test]
    fn selector_keys_cycle_the_catalog() {
        let (mut card, _, _, _rx) = card(FormConfig::generic());
        card.focus_next();
        card.handle_key(key(KeyCode::Down));
        assert_eq!(card.form().target().map(|b| b.id), Some("betway"));
        card.handle_key(key(KeyCode::Down));
        assert_eq!(card.form().target().map(|b| b.id), Some("1xbet"));
        card.handle_key(key(KeyCode::Up));
        assert_eq!(card.form().target().map(|b| b.id), Some("betway"));
    }

    #[tokio::test]
    async fn enter_with_missing_fields_is_rejected() {
        let (mut card, notifier, _, _rx) = card(FormConfig::generic());
        card.handle_key(key(KeyCode::Enter));
        assert_eq!(notifier.titles(), vec!["Missing Information"]);
        assert!(!card.form().is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn convert_then_copy() {
        let (mut card, notifier, clipboard, mut rx) = card(FormConfig::generic());
        type_text(&mut card, "ABC123");
        card.focus_next();
        card.handle_key(key(KeyCode::Down));
        card.focus_next();
        card.handle_key(key(KeyCode::Enter));
        assert!(card.form().is_busy());

        let completion = rx.recv().await.expect("completion");
        assert!(card.form_mut().complete(completion));
        assert_eq!(card.form().result(), "betway-ABC123-converted");
        assert_eq!(
            card.copy_text().as_deref(),
            Some("betway-ABC123-converted")
        );

        // Result panel joins the tab order after the button
        card.focus_next();
        assert_eq!(card.focus(), ComponentId::ResultPanel);
        assert_eq!(card.handle_key(key(KeyCode::Enter)), Handled::Yes);
        assert_eq!(
            clipboard.0.lock().unwrap().as_deref(),
            Some("betway-ABC123-converted")
        );
        assert_eq!(notifier.titles(), vec!["Success!", "Copied!"]);
    }

    #[test]
    fn height_tracks_visible_sections() {
        let (generic, _, _, _rx) = card(FormConfig::generic());
        let (fixed, _, _, _rx2) = card(FormConfig::fixed_target(crate::catalog::BETPAWA));
        // Selector label plus its bordered box
        assert_eq!(
            generic.required_height(100),
            fixed.required_height(100) + 4
        );
        // Narrow cards wrap the subtitle onto more rows
        assert!(generic.required_height(24) > generic.required_height(100));
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_result_saturates_height() {
        let (mut card, _, _, mut rx) = card(FormConfig::generic());
        card.paste(&"A".repeat(200_000));
        assert!(card.form_mut().select_target("betway"));
        card.submit();
        let completion = rx.recv().await.expect("completion");
        assert!(card.form_mut().complete(completion));

        // One char per row at this width, far past u16::MAX rows
        assert_eq!(card.required_height(7), u16::MAX);
    }

    #[test]
    fn renders_title_and_controls() {
        let (card, _, _, _rx) = card(FormConfig::generic());
        let theme = Theme::default();
        let backend = TestBackend::new(60, card.required_height(60));
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, card.focus(), 0);
                card.render(f, f.area(), &ctx);
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(TITLE));
        assert!(screen.contains(CODE_PLACEHOLDER));
        assert!(screen.contains(TARGET_PLACEHOLDER));
        assert!(screen.contains("Convert Bet Slip"));
        assert!(!screen.contains(COPY_LABEL));
    }
}
