//! Session wiring for the console

mod context;
mod revoke;

pub use context::*;
