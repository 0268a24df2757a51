//! `aerosense-core`
//!
//! **Responsibility:** pure primitives every simulated prediction is built
//! on: the deterministic value generator and shared numeric helpers.
//! No I/O, no clock, no process state.

pub mod deterministic;

pub use deterministic::{derive, derive_index, derive_unit, round_to};
