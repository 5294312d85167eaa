//! Syntax diagnostics.
//!
//! Diagnostics are accumulated during a parse, never thrown. Each one
//! carries the span of the offending token and renders to a fixed message
//! format through `Display`.

pub mod errors;

#[cfg(test)]
mod tests;
