#![warn(clippy::all, clippy::pedantic)]

pub mod randomizer_tests;
pub mod timing_tests;
pub mod ui_tests;

// Import test utilities
pub mod test_utils;
