//! Shared foundational types for the Tempus timing analyzer.
//!
//! This crate provides the [`Frequency`] value type with unit parsing and
//! display, plus period/frequency conversions used by configuration loading
//! and timing reports.

#![warn(missing_docs)]

pub mod frequency;

pub use frequency::{Frequency, ParseFrequencyError};
