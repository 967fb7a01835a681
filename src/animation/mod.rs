// src/animation/mod.rs
//! Shuffle-then-lock reveal of a password into a display sink.

mod animator;
mod sink;
mod state;

pub use animator::{RevealAnimator, RevealError, RevealHandle};
pub use sink::{DisplaySink, MemorySink, TerminalSink};
