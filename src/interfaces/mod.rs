//! Outer surfaces: batch input and reporting.

pub mod csv;
