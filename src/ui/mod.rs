mod display;
mod keypad;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG)), area);

    let app_layout = layout::compute_layout(area);
    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
