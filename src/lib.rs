//! Toolbox library exports for testing

pub mod core;
pub mod tools;
pub mod tui;

#[cfg(test)]
pub mod test_support;
