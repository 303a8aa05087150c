//! Component trait system for TUI architecture
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to render, edit or copy every part of the screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │      (orchestrator: routes keys, owns toasts and theme)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌────────────┐
//!                       │  FormCard  │──▶ TextInput (bet slip code)
//!                       └────────────┘
//!                   Component, Interactive, Copyable
//! ```
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Copyable`] - Components that provide clipboard content
//! - [`Interactive`] - Components that handle keyboard input

mod component;
mod copyable;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
