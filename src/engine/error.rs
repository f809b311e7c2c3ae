use thiserror::Error;

/// Text shown in the readout while the calculator is in its error state.
pub const ERROR_MARKER: &str = "Error";

/// Arithmetic failures. These are carried in the calculator state, never
/// raised out of the engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}
