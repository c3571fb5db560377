//! Brace markup for terminal colors, with a translating printer.
//!
//! The directive translator lives in [`markup`] (the `warna-markup` crate)
//! and is re-exported here. This crate adds the explicit print wrapper,
//! logger setup, and the `warna` command-line tool.
//!
//! ```
//! use warna::{Printer, translate};
//!
//! assert_eq!(translate("{RED(B)}error"), "\x1b[31;1merror\x1b[0m");
//!
//! let mut printer = Printer::new(Vec::new());
//! printer.print(&[&"{GREEN}ok", &3]).unwrap();
//! assert_eq!(printer.into_inner(), b"\x1b[32mok\x1b[0m 3\n");
//! ```
//!
//! Printing to standard output goes through the macros, which return a
//! [`Result`] like `writeln!` does:
//!
//! ```no_run
//! use warna::cprintln;
//!
//! fn main() -> warna::Result<()> {
//!     cprintln!("{YELLOW(U)}warning:", "disk almost full")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod log_init;
pub mod print;

pub use warna_markup as markup;

pub use error::{Result, WarnaError};
pub use log_init::init_logger;
pub use print::{PrintArg, PrintOptions, Printer};
pub use warna_markup::{
    Directive, DirectiveError, EscapeSequence, RESET, Translate, translate, translate_str,
};
