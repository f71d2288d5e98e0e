//! Ruler watch face for the PineTime
//!
//! Shows the current hour and minute, the current and the next hour at both
//! ends of a ruler, and a fill bar that grows with every minute of the hour.
//! Everything in here runs on the host as well, the hardware lives in `main.rs`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod clock;
pub mod system;
pub mod ui;
