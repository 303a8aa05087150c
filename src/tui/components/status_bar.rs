// Status bar component
//
// Bottom line: key hints for the focused control on the left, the most recent
// log message on the right.

use super::formatters::display_width;
use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Hints shown regardless of focus
const GLOBAL_HINTS: &str = "Tab:next  ^Y:copy  F2:theme  Esc:quit";
const GLOBAL_HINTS_COMPACT: &str = "Tab  ^Y  Esc";

/// Build the hint string for the given width
pub fn hints(focus_hint: Option<&str>, bp: Breakpoint) -> String {
    if !bp.at_least(Breakpoint::Normal) {
        return format!(" {}", GLOBAL_HINTS_COMPACT);
    }
    match focus_hint {
        Some(hint) if bp.at_least(Breakpoint::Wide) => format!(" {}  │  {}", hint, GLOBAL_HINTS),
        _ => format!(" {}", GLOBAL_HINTS),
    }
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: focused-control hints, global hints, latest log
/// - Normal: global hints, latest log
/// - Compact: abbreviated hints only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let left = hints(app.form_card.focus_hint(), bp);
    let style = Style::default().fg(app.theme.status_bar).bg(app.theme.background);

    let latest = app
        .log_buffer
        .latest()
        .filter(|_| bp.at_least(Breakpoint::Normal));

    let Some(entry) = latest else {
        f.render_widget(Paragraph::new(left).style(style), area);
        return;
    };

    let left_width = display_width(&left) as u16;
    let [hint_area, log_area] =
        Layout::horizontal([Constraint::Length(left_width), Constraint::Min(0)]).areas(area);

    let log_style = match entry.level {
        LogLevel::Error => style.fg(app.theme.error),
        _ => style,
    };
    let log_text = format!(
        "{} {} {} ",
        entry.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    );

    f.render_widget(Paragraph::new(left).style(style), hint_area);
    f.render_widget(
        Paragraph::new(log_text)
            .alignment(Alignment::Right)
            .style(log_style),
        log_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_hints_drop_focus_detail() {
        let hint = hints(Some("Enter:copy"), Breakpoint::Compact);
        assert!(!hint.contains("Enter:copy"));
        assert!(hint.contains("Esc"));
    }

    #[test]
    fn wide_hints_lead_with_focused_control() {
        let hint = hints(Some("Enter:copy"), Breakpoint::Wide);
        assert!(hint.trim_start().starts_with("Enter:copy"));
        assert!(hint.contains("F2:theme"));
    }
}
