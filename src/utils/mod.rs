//! Independent support tools / utilities

pub mod float;
