//! Console output helpers.

pub mod icons;
