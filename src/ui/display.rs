use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let readout_style = if state.calculator.is_error() {
        Theme::readout_error()
    } else {
        Theme::readout()
    };

    let lines = vec![
        Line::from(Span::styled(fit_right(&state.hint_line(), width), Theme::hint())),
        Line::from(Span::styled(
            fit_right(state.calculator.display(), width),
            readout_style,
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Right);
    frame.render_widget(paragraph, inner);
}

/// Keep the trailing characters of `text` that fit in `width` columns, so
/// the least significant digits of a long entry stay visible.
pub fn fit_right(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}
