//! Period table layout.
//!
//! Reshapes already computed periods into the row/column grid used by the
//! report screen and the printable report. Nothing is recomputed here; the
//! builder only indexes figures carried by each [`Period`](crate::periods::Period).

pub mod render;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::*;
