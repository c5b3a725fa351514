//! Scheduling arithmetic for the Shift Scheduling Engine.
//!
//! This module contains the pure calculators the command service builds on:
//! the time-window calculator that turns a calendar date plus two `HH:MM`
//! strings into concrete start/finish instants (rolling overnight shifts
//! into the next day), and the buffered clock-in/clock-out window checks.

mod clock_rules;
mod time_window;

pub use clock_rules::{
    ClockPolicy, DEFAULT_EARLY_CLOCK_IN_MINUTES, DEFAULT_MINIMUM_CLOCK_OUT_MINUTES,
};
pub use time_window::{TimeWindow, parse_clock_time, shift_window};
