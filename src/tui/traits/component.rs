//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! Identity lives in `ComponentId`, which drives focus inside the form card.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking (which control receives input) and event routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Bet slip code text field
    CodeInput,
    /// Target bookmaker selector
    TargetSelect,
    /// Convert button
    SubmitButton,
    /// Converted code panel with its copy action
    ResultPanel,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    pub fn new(theme: &'a Theme, focus: ComponentId, animation_frame: usize) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
pub trait Component {
    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, focus, animations)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
