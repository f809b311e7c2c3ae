use super::error::{CalcError, ERROR_MARKER};
use super::event::Operator;

/// Left-hand operand and operator captured when an operator key is pressed.
///
/// The operand is kept as the readout text at capture time so the hint shows
/// exactly what the user saw.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    pub operand: String,
    pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Readout {
    Entry(String),
    Error(CalcError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    PendingOp,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub(super) readout: Readout,
    pub(super) pending: Option<PendingOperation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            readout: Readout::Entry("0".to_string()),
            pending: None,
        }
    }

    /// Primary readout text: the number being entered, the last result, or
    /// the error marker.
    pub fn display(&self) -> &str {
        match &self.readout {
            Readout::Entry(text) => text,
            Readout::Error(_) => ERROR_MARKER,
        }
    }

    pub fn error(&self) -> Option<CalcError> {
        match self.readout {
            Readout::Error(e) => Some(e),
            Readout::Entry(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn mode(&self) -> Mode {
        match (&self.readout, &self.pending) {
            (Readout::Error(_), _) => Mode::Error,
            (Readout::Entry(_), Some(_)) => Mode::PendingOp,
            (Readout::Entry(_), None) => Mode::Idle,
        }
    }

    /// Ancillary readout for a pending operation, e.g. `5 +`.
    pub fn hint(&self) -> Option<String> {
        match (self.pending_operand(), self.pending_operator()) {
            (Some(operand), Some(operator)) => Some(format!("{} {}", operand, operator)),
            _ => None,
        }
    }
}
