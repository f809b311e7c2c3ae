use super::event::{Digit, InputEvent};
use super::number;
use super::state::{CalculatorState, PendingOperation, Readout};

impl CalculatorState {
    pub fn apply(self, event: InputEvent) -> Self {
        apply(self, event)
    }
}

/// Compute the state that follows `event`.
///
/// While the readout holds an error only `Clear` has an effect. Digits and
/// the decimal point are ignored once the readout has overflowed. Pressing an
/// operator while another is pending replaces the pending operation with the
/// current readout and the new operator; the earlier one is not evaluated.
pub fn apply(state: CalculatorState, event: InputEvent) -> CalculatorState {
    let (entry, pending) = match state {
        CalculatorState {
            readout: Readout::Entry(text),
            pending,
        } => (text, pending),
        _ if event == InputEvent::Clear => return CalculatorState::new(),
        errored => return errored,
    };

    match event {
        InputEvent::Digit(_) | InputEvent::Decimal if !number::accepts_entry(&entry) => {
            with_entry(entry, pending)
        }
        InputEvent::Digit(digit) => with_entry(push_digit(entry, digit), pending),
        InputEvent::Decimal => with_entry(push_decimal(entry), pending),
        InputEvent::Operator(operator) => CalculatorState {
            readout: Readout::Entry("0".to_string()),
            pending: Some(PendingOperation {
                operand: entry,
                operator,
            }),
        },
        InputEvent::Equals => match pending {
            None => with_entry(entry, None),
            Some(op) => {
                let lhs = number::parse(&op.operand);
                let rhs = number::parse(&entry);
                let readout = match number::evaluate(lhs, op.operator, rhs) {
                    Ok(value) => Readout::Entry(number::format(value)),
                    Err(e) => Readout::Error(e),
                };
                CalculatorState {
                    readout,
                    pending: None,
                }
            }
        },
        InputEvent::Clear => CalculatorState::new(),
        InputEvent::ToggleSign => {
            let negated = number::parse(&entry) * -1.0;
            with_entry(number::format(negated), pending)
        }
        InputEvent::Percent => {
            let scaled = number::parse(&entry) / 100.0;
            with_entry(number::format(scaled), pending)
        }
    }
}

fn with_entry(text: String, pending: Option<PendingOperation>) -> CalculatorState {
    CalculatorState {
        readout: Readout::Entry(text),
        pending,
    }
}

fn push_digit(mut entry: String, digit: Digit) -> String {
    if entry == "0" {
        return digit.as_char().to_string();
    }
    entry.push(digit.as_char());
    entry
}

fn push_decimal(mut entry: String) -> String {
    if !entry.contains('.') {
        entry.push('.');
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::CalcError;
    use crate::engine::event::Operator;
    use crate::engine::state::Mode;
    use proptest::prelude::*;

    fn d(value: u8) -> InputEvent {
        InputEvent::digit(value).unwrap()
    }

    fn op(operator: Operator) -> InputEvent {
        InputEvent::Operator(operator)
    }

    fn run(events: &[InputEvent]) -> CalculatorState {
        events
            .iter()
            .fold(CalculatorState::new(), |state, event| state.apply(*event))
    }

    fn error_state() -> CalculatorState {
        run(&[d(1), op(Operator::Divide), d(0), InputEvent::Equals])
    }

    // ===== Entry =====

    #[test]
    fn test_leading_zero_is_replaced() {
        assert_eq!(run(&[d(0), d(5)]).display(), "5");
        assert_eq!(run(&[d(0), d(0), d(0)]).display(), "0");
        assert_eq!(run(&[d(1), d(0), d(0)]).display(), "100");
    }

    #[test]
    fn test_decimal_after_zero_keeps_zero() {
        assert_eq!(run(&[InputEvent::Decimal, d(5)]).display(), "0.5");
    }

    #[test]
    fn test_second_decimal_is_ignored() {
        let state = run(&[d(1), InputEvent::Decimal, d(2), InputEvent::Decimal, d(3)]);
        assert_eq!(state.display(), "1.23");
    }

    #[test]
    fn test_digits_append_to_result() {
        let state = run(&[d(5), op(Operator::Add), d(3), InputEvent::Equals, d(1)]);
        assert_eq!(state.display(), "81");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_captures_operand() {
        let state = run(&[d(5), op(Operator::Add)]);
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending_operand(), Some("5"));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert_eq!(state.hint().as_deref(), Some("5 +"));
    }

    #[test]
    fn test_addition() {
        let state = run(&[d(5), op(Operator::Add), d(3), InputEvent::Equals]);
        assert_eq!(state.display(), "8");
        assert_eq!(state.mode(), Mode::Idle);
        assert_eq!(state.pending_operand(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_subtraction_of_decimals() {
        let state = run(&[
            d(2),
            InputEvent::Decimal,
            d(5),
            op(Operator::Subtract),
            d(0),
            InputEvent::Decimal,
            d(5),
            InputEvent::Equals,
        ]);
        assert_eq!(state.display(), "2");
    }

    #[test]
    fn test_multiplication_and_division() {
        assert_eq!(
            run(&[d(6), op(Operator::Multiply), d(7), InputEvent::Equals]).display(),
            "42"
        );
        assert_eq!(
            run(&[d(1), op(Operator::Divide), d(4), InputEvent::Equals]).display(),
            "0.25"
        );
    }

    #[test]
    fn test_float_noise_is_preserved() {
        let state = run(&[
            InputEvent::Decimal,
            d(1),
            op(Operator::Add),
            InputEvent::Decimal,
            d(2),
            InputEvent::Equals,
        ]);
        assert_eq!(state.display(), "0.30000000000000004");
    }

    #[test]
    fn test_chained_operator_overwrites_pending() {
        let state = run(&[d(5), op(Operator::Multiply), d(2), op(Operator::Add)]);
        assert_eq!(state.pending_operand(), Some("2"));
        assert_eq!(state.pending_operator(), Some(Operator::Add));

        let state = state.apply(d(1)).apply(InputEvent::Equals);
        // 2 + 1: the "× 2" is replaced, not evaluated, and not kept as 5 × 1
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn test_repeated_operator_captures_zero() {
        let state = run(&[d(5), op(Operator::Add), op(Operator::Subtract)]);
        assert_eq!(state.pending_operand(), Some("0"));
        assert_eq!(state.pending_operator(), Some(Operator::Subtract));
    }

    fn nines(count: usize) -> Vec<InputEvent> {
        vec![d(9); count]
    }

    #[test]
    fn test_overflowed_readout_refuses_entry() {
        let mut events = vec![d(7), op(Operator::Divide)];
        events.extend(nines(309));
        events.push(InputEvent::Percent);
        let state = run(&events);
        assert_eq!(state.display(), "inf");

        let state = state.apply(d(5)).apply(InputEvent::Decimal);
        assert_eq!(state.display(), "inf");

        // 7 ÷ inf, not a division by zero
        let state = state.apply(InputEvent::Equals);
        assert!(!state.is_error());
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_overflow_times_zero_is_nan() {
        let mut events = nines(309);
        events.extend([op(Operator::Multiply), InputEvent::Equals]);
        let state = run(&events);
        assert_eq!(state.display(), "NaN");
        assert!(!state.is_error());

        assert_eq!(state.clone().apply(d(3)), state);
        assert_eq!(state.apply(InputEvent::Clear), CalculatorState::new());
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let state = run(&[d(4), d(2)]);
        assert_eq!(state.clone().apply(InputEvent::Equals), state);
    }

    #[test]
    fn test_zero_operand_is_still_pending() {
        let state = run(&[d(0), op(Operator::Subtract), d(3), InputEvent::Equals]);
        assert_eq!(state.display(), "-3");
    }

    // ===== Functions =====

    #[test]
    fn test_toggle_sign() {
        assert_eq!(run(&[d(5), InputEvent::ToggleSign]).display(), "-5");
        assert_eq!(
            run(&[d(5), InputEvent::ToggleSign, InputEvent::ToggleSign]).display(),
            "5"
        );
        assert_eq!(run(&[InputEvent::ToggleSign]).display(), "0");
    }

    #[test]
    fn test_toggle_sign_drops_trailing_decimal() {
        let state = run(&[d(5), InputEvent::Decimal, InputEvent::ToggleSign]);
        assert_eq!(state.display(), "-5");
    }

    #[test]
    fn test_percent() {
        assert_eq!(run(&[d(5), InputEvent::Percent]).display(), "0.05");
        assert_eq!(run(&[d(2), d(0), d(0), InputEvent::Percent]).display(), "2");
    }

    #[test]
    fn test_functions_keep_pending_operation() {
        let state = run(&[d(5), op(Operator::Add), d(3), InputEvent::ToggleSign]);
        assert_eq!(state.display(), "-3");
        assert_eq!(state.pending_operand(), Some("5"));
        assert_eq!(state.apply(InputEvent::Equals).display(), "2");
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = run(&[d(5), op(Operator::Add), d(3), InputEvent::Clear]);
        assert_eq!(state, CalculatorState::new());
    }

    // ===== Error state =====

    #[test]
    fn test_division_by_zero_is_error() {
        let state = error_state();
        assert_eq!(state.display(), "Error");
        assert_eq!(state.error(), Some(CalcError::DivisionByZero));
        assert_eq!(state.mode(), Mode::Error);
        assert_eq!(state.pending_operand(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_division_by_zero_point_zero_is_error() {
        let state = run(&[
            d(7),
            op(Operator::Divide),
            d(0),
            InputEvent::Decimal,
            d(0),
            InputEvent::Equals,
        ]);
        assert!(state.is_error());
    }

    #[test]
    fn test_error_ignores_everything_but_clear() {
        let errored = error_state();
        let events = [
            d(3),
            InputEvent::Decimal,
            op(Operator::Add),
            InputEvent::Equals,
            InputEvent::ToggleSign,
            InputEvent::Percent,
        ];
        for event in events {
            assert_eq!(errored.clone().apply(event), errored, "event {:?}", event);
        }
        assert_eq!(errored.apply(InputEvent::Clear), CalculatorState::new());
    }

    // ===== Properties =====

    fn digit_strategy() -> impl Strategy<Value = u8> {
        0u8..=9u8
    }

    fn operator_strategy() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
    }

    fn event_strategy() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            4 => digit_strategy().prop_map(d),
            1 => Just(InputEvent::Decimal),
            1 => operator_strategy().prop_map(InputEvent::Operator),
            1 => Just(InputEvent::Equals),
            1 => Just(InputEvent::Clear),
            1 => Just(InputEvent::ToggleSign),
            1 => Just(InputEvent::Percent),
        ]
    }

    proptest! {
        #[test]
        fn prop_digits_collapse_leading_zeros(digits in prop::collection::vec(digit_strategy(), 1..15)) {
            let events: Vec<_> = digits.iter().map(|v| d(*v)).collect();
            let typed: String = digits.iter().map(|v| char::from(b'0' + v)).collect();
            let trimmed = typed.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            let state = run(&events);
            prop_assert_eq!(state.display(), expected);
        }

        #[test]
        fn prop_decimal_is_idempotent(events in prop::collection::vec(event_strategy(), 0..30)) {
            let once = run(&events).apply(InputEvent::Decimal);
            let twice = once.clone().apply(InputEvent::Decimal);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_toggle_sign_is_involution(events in prop::collection::vec(event_strategy(), 0..30)) {
            let state = run(&events);
            prop_assume!(!state.is_error());
            let original = number::parse(state.display());
            let back = state.apply(InputEvent::ToggleSign).apply(InputEvent::ToggleSign);
            prop_assert_eq!(number::parse(back.display()), original);
            prop_assert_ne!(back.display(), "-0");
        }

        #[test]
        fn prop_clear_returns_initial_state(events in prop::collection::vec(event_strategy(), 0..30)) {
            prop_assert_eq!(run(&events).apply(InputEvent::Clear), CalculatorState::new());
        }

        #[test]
        fn prop_readout_has_at_most_one_decimal(events in prop::collection::vec(event_strategy(), 0..40)) {
            let mut state = CalculatorState::new();
            for event in events {
                state = state.apply(event);
                prop_assert!(state.display().matches('.').count() <= 1);
                if let Some(operand) = state.pending_operand() {
                    prop_assert!(operand.matches('.').count() <= 1);
                }
            }
        }
    }
}
