//! Subcommand implementations.
//!
//! Each command borrows the loaded [`Dataset`](crate::Dataset) and returns
//! the text to print.

pub mod orders;
pub mod products;
pub mod quote;
pub mod users;
