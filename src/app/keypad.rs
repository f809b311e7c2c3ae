//! Keypad model: button grid, keyboard selection, and press flash.
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```
//!
//! Every row is four grid units wide; the `0` button spans two.

use crate::engine::{Digit, InputEvent, Operator};

pub const GRID_UNITS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operation,
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub event: InputEvent,
    pub kind: ButtonKind,
    /// Width in grid units.
    pub span: u16,
}

impl KeypadButton {
    fn number(digit: Digit) -> Self {
        Self {
            label: digit.label(),
            event: InputEvent::Digit(digit),
            kind: ButtonKind::Number,
            span: 1,
        }
    }

    fn operation(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            event: InputEvent::Operator(op),
            kind: ButtonKind::Operation,
            span: 1,
        }
    }

    fn function(label: &'static str, event: InputEvent) -> Self {
        Self {
            label,
            event,
            kind: ButtonKind::Function,
            span: 1,
        }
    }

    fn wide(self) -> Self {
        Self { span: 2, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flash {
    position: (usize, usize),
    ticks_left: u8,
}

#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
    selected: (usize, usize),
    flash: Option<Flash>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        let d = Digit::ALL;
        let rows = vec![
            vec![
                KeypadButton::function("C", InputEvent::Clear),
                KeypadButton::function("±", InputEvent::ToggleSign),
                KeypadButton::function("%", InputEvent::Percent),
                KeypadButton::operation(Operator::Divide),
            ],
            vec![
                KeypadButton::number(d[7]),
                KeypadButton::number(d[8]),
                KeypadButton::number(d[9]),
                KeypadButton::operation(Operator::Multiply),
            ],
            vec![
                KeypadButton::number(d[4]),
                KeypadButton::number(d[5]),
                KeypadButton::number(d[6]),
                KeypadButton::operation(Operator::Subtract),
            ],
            vec![
                KeypadButton::number(d[1]),
                KeypadButton::number(d[2]),
                KeypadButton::number(d[3]),
                KeypadButton::operation(Operator::Add),
            ],
            vec![
                KeypadButton::number(d[0]).wide(),
                KeypadButton::function(".", InputEvent::Decimal),
                KeypadButton {
                    label: "=",
                    event: InputEvent::Equals,
                    kind: ButtonKind::Operation,
                    span: 1,
                },
            ],
        ];

        Self {
            rows,
            selected: (4, 2),
            flash: None,
        }
    }

    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn selected(&self) -> (usize, usize) {
        self.selected
    }

    pub fn selected_button(&self) -> Option<&KeypadButton> {
        let (row, col) = self.selected();
        self.button_at(row, col)
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selected == (row, col)
    }

    pub fn position_of(&self, event: InputEvent) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|button| button.event == event)
                .map(|c| (r, c))
        })
    }

    /// Move the selection one step, staying inside the grid. Vertical moves
    /// land on whichever button covers the same grid unit in the next row.
    pub fn move_selection(&mut self, direction: MoveDirection) {
        let (row, col) = self.selected;
        let last_row = self.rows.len().saturating_sub(1);
        self.selected = match direction {
            MoveDirection::Left => (row, col.saturating_sub(1)),
            MoveDirection::Right => (row, (col + 1).min(self.row_len(row).saturating_sub(1))),
            MoveDirection::Up if row > 0 => {
                (row - 1, self.column_at_unit(row - 1, self.unit_of(row, col)))
            }
            MoveDirection::Down if row < last_row => {
                (row + 1, self.column_at_unit(row + 1, self.unit_of(row, col)))
            }
            MoveDirection::Up | MoveDirection::Down => (row, col),
        };
    }

    /// Highlight the button that emits `event` for `ticks` ticks.
    pub fn flash(&mut self, event: InputEvent, ticks: u8) {
        self.flash = self
            .position_of(event)
            .filter(|_| ticks > 0)
            .map(|position| Flash {
                position,
                ticks_left: ticks,
            });
    }

    pub fn is_flashing(&self, row: usize, col: usize) -> bool {
        self.flash.is_some_and(|f| f.position == (row, col))
    }

    /// Count the flash down. Returns true when a highlight just ended.
    pub fn tick(&mut self) -> bool {
        let Some(flash) = self.flash.as_mut() else {
            return false;
        };
        flash.ticks_left = flash.ticks_left.saturating_sub(1);
        if flash.ticks_left == 0 {
            self.flash = None;
            return true;
        }
        false
    }

    fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    fn unit_of(&self, row: usize, col: usize) -> u16 {
        self.rows
            .get(row)
            .map_or(0, |r| r.iter().take(col).map(|b| b.span).sum())
    }

    fn column_at_unit(&self, row: usize, unit: u16) -> usize {
        let Some(buttons) = self.rows.get(row) else {
            return 0;
        };
        let mut start = 0;
        for (col, button) in buttons.iter().enumerate() {
            if unit < start + button.span {
                return col;
            }
            start += button.span;
        }
        buttons.len().saturating_sub(1)
    }
}
