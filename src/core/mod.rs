//! Core library components.
//!
//! Secret resolution, placeholder substitution and the files they produce.
//! Nothing here parses arguments or prints to the terminal directly.

pub mod config;
pub mod constants;
pub mod emit;
pub mod fetch;
pub mod namespace;
pub mod requirements;
pub mod source;
pub mod spec;
pub mod store;
pub mod substitute;
pub mod writer;
