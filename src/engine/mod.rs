//! Calculator engine: a pure reducer from (state, input event) to state.
//!
//! Nothing here touches the terminal. The app layer feeds keypad presses in
//! through [`apply`] and renders [`CalculatorState::display`] and
//! [`CalculatorState::hint`].

pub mod error;
pub mod event;
pub mod number;
pub mod reducer;
pub mod state;

pub use event::{Digit, InputEvent, Operator};
pub use reducer::apply;
pub use state::{CalculatorState, Mode};
