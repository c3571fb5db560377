//! Directive scanning and handling.
//!
//! This module contains the parameter tokenizer, the four directive
//! handlers, and the pass pipeline that ties them to the input text.

mod handlers;
mod params;
mod passes;

pub use handlers::{basic, hex, indexed, rgb};
pub use params::Params;
pub use passes::{parse_directive, run_pass};
