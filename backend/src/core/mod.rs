//! Core simulation primitives

pub mod period;
