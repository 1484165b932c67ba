//! Time-range domain types for Tempo.
//!
//! This crate contains pure value types with no IO, no async, and minimal
//! dependencies: closed intervals ([`InclusiveRange`]), intervals with
//! configurable boundary inclusivity ([`BoundedRange`]), and stateless
//! calendar-alignment helpers ([`calendar`]).

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented on the strict constructors

mod bounded;
mod range;

pub mod calendar;

pub use bounded::{BoundKind, BoundedRange};
pub use range::{InclusiveRange, InclusiveRangeIter, InvalidRangeError, InvalidStepError};
