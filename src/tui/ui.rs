// UI rendering logic
//
// One screen: the form card centered on a themed background, a status line
// at the bottom and any live toast drawn on top.

use super::app::App;
use super::components::render_status;
use super::layout::{card_width, centered_card};
use super::traits::{Component, RenderContext};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let card = &app.form_card;
    let height = card.required_height(card_width(main));
    let ctx = RenderContext::new(&app.theme, card.focus(), app.animation_frame);
    card.render(f, centered_card(main, height), &ctx);

    render_status(f, status, app);

    if let Some(toast) = app.toasts.current() {
        toast.render(f, main, &app.theme);
    }
}
