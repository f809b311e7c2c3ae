use crate::app::keypad::Keypad;
use crate::config::AppConfig;
use crate::engine::{CalculatorState, InputEvent, Mode};
use tracing::debug;

pub struct AppState {
    pub config: AppConfig,
    pub calculator: CalculatorState,
    pub keypad: Keypad,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            calculator: CalculatorState::new(),
            keypad: Keypad::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Feed one keypad event through the engine and flash its button.
    pub fn apply_input(&mut self, event: InputEvent) {
        let previous = std::mem::take(&mut self.calculator);
        self.calculator = crate::engine::apply(previous, event);
        self.keypad.flash(event, self.config.ui.flash_ticks);
        self.dirty = true;
        debug!(
            ?event,
            display = self.calculator.display(),
            pending = ?self.calculator.hint(),
            "applied input"
        );
    }

    /// Text for the hint line above the readout. Empty when nothing is
    /// pending or the hint is switched off.
    pub fn hint_line(&self) -> String {
        if !self.config.ui.show_pending_hint {
            return String::new();
        }
        self.calculator.hint().unwrap_or_default()
    }

    pub fn mode_label(&self) -> &'static str {
        match self.calculator.mode() {
            Mode::Idle => "READY",
            Mode::PendingOp => "PENDING",
            Mode::Error => "ERROR",
        }
    }
}
