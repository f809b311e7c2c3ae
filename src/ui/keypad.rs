use crate::app::keypad::{KeypadButton, GRID_UNITS};
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let keypad = &state.keypad;
    let row_count = keypad.rows().len() as u32;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..row_count).map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    for (r, (buttons, row_area)) in keypad.rows().iter().zip(row_areas.iter()).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                buttons
                    .iter()
                    .map(|b| Constraint::Ratio(b.span as u32, GRID_UNITS as u32)),
            )
            .split(*row_area);

        for (c, (button, cell)) in buttons.iter().zip(cells.iter()).enumerate() {
            render_button(
                frame,
                *cell,
                button,
                keypad.is_selected(r, c),
                keypad.is_flashing(r, c),
            );
        }
    }
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    button: &KeypadButton,
    selected: bool,
    flashing: bool,
) {
    let face = if flashing {
        Theme::button_flash(button.kind)
    } else {
        Theme::button(button.kind)
    };
    let (border_style, border_type) = if selected {
        (Theme::border_selected(), Theme::border_type_selected())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(face);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    // Label on the middle line of the button face
    let label_area = Rect {
        y: inner.y + (inner.height - 1) / 2,
        height: 1,
        ..inner
    };
    let label = Paragraph::new(Span::styled(button.label, face.add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center);
    frame.render_widget(label, label_area);
}
