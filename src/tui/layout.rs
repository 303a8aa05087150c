//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::Rect;

/// Widest the form card is allowed to grow
pub const CARD_MAX_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Width the form card gets inside `area`.
///
/// Capped at [`CARD_MAX_WIDTH`], with a 2-column margin on narrow terminals.
pub fn card_width(area: Rect) -> u16 {
    area.width
        .saturating_sub(4)
        .min(CARD_MAX_WIDTH)
        .max(1)
        .min(area.width)
}

/// Center a card of the given height inside `area`. Both dimensions are
/// clamped to the area.
pub fn centered_card(area: Rect, height: u16) -> Rect {
    let width = card_width(area);
    let height = height.min(area.height);

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
