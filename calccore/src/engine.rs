//! Calculator logic - input accumulation, operator slots, evaluation
//!
//! The engine is a pure state machine: it owns nothing, takes the current
//! `CalcState` plus one `Action`, and returns the next state.  Malformed or
//! premature actions (operator before any digit, equals with nothing
//! pending, digit past the length cap) never fail; they return the state
//! unchanged.  The UI layer dispatches one action per key press and renders
//! `CalcState::display()` afterwards.

use serde::{Deserialize, Serialize};

use crate::format::format_result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Plain IEEE-754 arithmetic. Division by zero is not special-cased:
    /// it yields an infinity (or NaN for 0/0) which flows into the display.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }

    /// Multiply and divide bind tighter than add and subtract.
    fn is_high_precedence(&self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }
}

/// One discrete user interaction. The only input the engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Evaluate,
    Clear,
}

/// The in-progress calculation. Up to three operands being typed and up to
/// two pending operators between them.
///
/// Exactly one operand is "active" (receiving digits) at any time: operand1
/// until the first operator is chosen, operand2 until the second, operand3
/// after that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcState {
    pub operand1: String,
    pub operand2: String,
    pub operand3: String,
    pub operator1: Option<Operator>,
    pub operator2: Option<Operator>,
    /// Set after a successful evaluation. The next digit starts a fresh
    /// calculation instead of appending to the result.
    #[serde(default)]
    pub just_evaluated: bool,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single text line shown to the user: operands and operator
    /// symbols concatenated in entry order.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(
            self.operand1.len() + self.operand2.len() + self.operand3.len() + 2,
        );
        out.push_str(&self.operand1);
        if let Some(op) = self.operator1 {
            out.push(op.symbol());
        }
        out.push_str(&self.operand2);
        if let Some(op) = self.operator2 {
            out.push(op.symbol());
        }
        out.push_str(&self.operand3);
        out
    }
}

/// Which operand is currently receiving input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    First,
    Second,
    Third,
}

/// Tunable limits. The defaults match the reference behavior: 8 digits per
/// operand, 15 characters of result, '.' as the decimal separator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub max_operand_digits: usize,
    pub max_result_chars: usize,
    pub decimal_separator: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_operand_digits: 8,
            max_result_chars: 15,
            decimal_separator: '.',
        }
    }
}

/// The calculator engine. Holds only configuration; all calculation state
/// lives in the `CalcState` value owned by the caller.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one action to a state, producing the next state.
    ///
    /// Pure and total: same inputs give the same output, and no input
    /// panics. Actions that don't apply in the current state are no-ops.
    pub fn apply(&self, state: &CalcState, action: Action) -> CalcState {
        match action {
            Action::Digit(d) => self.enter_digit(state, d),
            Action::DecimalPoint => self.enter_decimal(state),
            Action::Operator(op) => self.enter_operator(state, op),
            Action::Evaluate => self.evaluate(state),
            Action::Clear => CalcState::new(),
        }
    }

    fn active_slot(state: &CalcState) -> Slot {
        if state.operator1.is_none() {
            Slot::First
        } else if state.operator2.is_none() {
            Slot::Second
        } else {
            Slot::Third
        }
    }

    fn active_operand<'a>(state: &'a mut CalcState) -> &'a mut String {
        match Self::active_slot(state) {
            Slot::First => &mut state.operand1,
            Slot::Second => &mut state.operand2,
            Slot::Third => &mut state.operand3,
        }
    }

    fn enter_digit(&self, state: &CalcState, digit: u8) -> CalcState {
        let ch = char::from(b'0' + digit.min(9));
        let mut next = state.clone();

        // A fresh digit after "=" starts a new calculation from scratch.
        if Self::active_slot(&next) == Slot::First && next.just_evaluated {
            next.operand1.clear();
            next.operand1.push(ch);
            next.just_evaluated = false;
            return next;
        }

        let max = self.config.max_operand_digits;
        let operand = Self::active_operand(&mut next);
        // The cap counts digits only; the decimal separator is free.
        if operand.chars().filter(char::is_ascii_digit).count() >= max {
            return state.clone();
        }
        operand.push(ch);
        next
    }

    fn enter_decimal(&self, state: &CalcState) -> CalcState {
        let sep = self.config.decimal_separator;
        let mut next = state.clone();
        let operand = Self::active_operand(&mut next);
        if operand.contains(sep) {
            return state.clone();
        }
        if operand.is_empty() {
            operand.push('0');
        }
        operand.push(sep);
        next
    }

    fn enter_operator(&self, state: &CalcState, op: Operator) -> CalcState {
        let mut next = state.clone();
        if !next.operand1.is_empty() && next.operand2.is_empty() {
            // Re-selecting overwrites: last choice wins for this slot.
            next.operator1 = Some(op);
        } else if !next.operand2.is_empty() && next.operand3.is_empty() {
            next.operator2 = Some(op);
        } else {
            return state.clone();
        }
        next
    }

    fn evaluate(&self, state: &CalcState) -> CalcState {
        let op1 = match state.operator1 {
            Some(op) => op,
            None => return state.clone(),
        };
        let (a, b) = match (
            self.parse_operand(&state.operand1),
            self.parse_operand(&state.operand2),
        ) {
            (Some(a), Some(b)) => (a, b),
            _ => return state.clone(),
        };

        let result = match state.operator2 {
            None => op1.apply(a, b),
            Some(op2) => {
                // A two-operator expression missing its third operand is
                // incomplete; don't evaluate half of it.
                if state.operand3.is_empty() {
                    return state.clone();
                }
                let c = match self.parse_operand(&state.operand3) {
                    Some(c) => c,
                    None => return state.clone(),
                };
                if op2.is_high_precedence() {
                    op1.apply(a, op2.apply(b, c))
                } else {
                    op2.apply(op1.apply(a, b), c)
                }
            }
        };

        CalcState {
            operand1: format_result(
                result,
                self.config.max_result_chars,
                self.config.decimal_separator,
            ),
            operand2: String::new(),
            operand3: String::new(),
            operator1: None,
            operator2: None,
            just_evaluated: true,
        }
    }

    fn parse_operand(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }
        let sep = self.config.decimal_separator;
        if sep == '.' {
            text.parse().ok()
        } else {
            text.replace(sep, ".").parse().ok()
        }
    }
}
