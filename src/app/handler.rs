use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::keypad::MoveDirection;
use crate::app::state::AppState;
use crate::engine::{Digit, InputEvent, Operator};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            if state.keypad.tick() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            info!("quit requested");
            vec![Action::Quit]
        }
        KeyCode::Up => select(state, MoveDirection::Up),
        KeyCode::Down => select(state, MoveDirection::Down),
        KeyCode::Left => select(state, MoveDirection::Left),
        KeyCode::Right => select(state, MoveDirection::Right),
        KeyCode::Char(' ') => match state.keypad.selected_button().map(|b| b.event) {
            Some(event) => press(state, event),
            None => vec![],
        },
        code => match input_for_key(code) {
            Some(event) => press(state, event),
            None => vec![],
        },
    }
}

fn select(state: &mut AppState, direction: MoveDirection) -> Vec<Action> {
    state.keypad.move_selection(direction);
    state.dirty = true;
    vec![]
}

fn press(state: &mut AppState, event: InputEvent) -> Vec<Action> {
    let was_error = state.calculator.is_error();
    state.apply_input(event);

    match state.calculator.error() {
        Some(err) if !was_error => {
            warn!(error = %err, "calculator entered error state");
            if state.config.ui.bell_on_error {
                return vec![Action::Bell];
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Keyboard shortcut for each keypad button.
pub fn input_for_key(code: KeyCode) -> Option<InputEvent> {
    let event = match code {
        KeyCode::Char(c) => {
            if let Some(digit) = Digit::from_char(c) {
                return Some(InputEvent::Digit(digit));
            }
            match c {
                '.' | ',' => InputEvent::Decimal,
                '+' => InputEvent::Operator(Operator::Add),
                '-' | '−' => InputEvent::Operator(Operator::Subtract),
                '*' | 'x' | 'X' | '×' => InputEvent::Operator(Operator::Multiply),
                '/' | '÷' => InputEvent::Operator(Operator::Divide),
                '=' => InputEvent::Equals,
                '%' => InputEvent::Percent,
                'n' | 'N' | '_' | '±' => InputEvent::ToggleSign,
                'c' | 'C' => InputEvent::Clear,
                _ => return None,
            }
        }
        KeyCode::Enter => InputEvent::Equals,
        KeyCode::Esc | KeyCode::Delete => InputEvent::Clear,
        _ => return None,
    };
    Some(event)
}
