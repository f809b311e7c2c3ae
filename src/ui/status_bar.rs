use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HELP: &str = "0-9 . + - * / = | n ± | % | c clear | arrows+space | q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode_style = if state.calculator.is_error() {
        Theme::status_mode_error()
    } else {
        Theme::status_mode()
    };

    let mut parts: Vec<Span> = vec![
        Span::styled(format!(" {} ", state.mode_label()), mode_style),
        Span::styled(format!(" {} ", KEY_HELP), Theme::status_bar()),
    ];

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
