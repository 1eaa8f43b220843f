#![warn(clippy::all, clippy::pedantic)]

pub mod rng_tests;
pub mod ui_tests;
