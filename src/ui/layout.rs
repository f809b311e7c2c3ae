use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Widest the calculator body grows; extra terminal width is left empty.
const MAX_WIDTH: u16 = 44;

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Calculator body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let status_bar = main_chunks[1];

    // Center the body horizontally
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Max(MAX_WIDTH)])
        .split(main_chunks[0])[0];

    // Body: display (hint + readout inside a border) | keypad
    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(5),    // Keypad
        ])
        .split(body);

    AppLayout {
        display: body_chunks[0],
        keypad: body_chunks[1],
        status_bar,
    }
}
