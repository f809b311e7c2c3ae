use crate::app::keypad::ButtonKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Black;
    pub const NUMBER_BG: Color = Color::Rgb(0x33, 0x33, 0x33);
    pub const OPERATION_BG: Color = Color::Rgb(0xFF, 0x95, 0x00);
    pub const FUNCTION_BG: Color = Color::Rgb(0xA5, 0xA5, 0xA5);
    pub const TEXT_MUTED: Color = Color::Rgb(0x75, 0x75, 0x75);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_selected() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_selected() -> BorderType {
        BorderType::Thick
    }

    pub fn readout() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn readout_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn button(kind: ButtonKind) -> Style {
        match kind {
            ButtonKind::Number => Style::default().fg(Color::White).bg(Self::NUMBER_BG),
            ButtonKind::Operation => Style::default().fg(Color::White).bg(Self::OPERATION_BG),
            ButtonKind::Function => Style::default().fg(Color::Black).bg(Self::FUNCTION_BG),
        }
    }

    pub fn button_flash(kind: ButtonKind) -> Style {
        Self::button(kind).add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_mode_error() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn status_mode() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }
}
