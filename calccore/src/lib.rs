//! calccore - shared library for the pocket calculator
//!
//! The interesting part lives in [`engine`]: a pure state machine that
//! turns button presses into an in-progress calculation and, on equals,
//! into a result. Everything else (formatting, persistence, theme) exists
//! to serve a front end.

pub mod engine;
pub mod format;
pub mod storage;
pub mod theme;

pub use engine::{Action, CalcState, Engine, EngineConfig, Operator};
pub use format::format_result;
pub use theme::{CalcColors, CalcTheme};
