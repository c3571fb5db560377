//! Translating printer.
//!
//! This is the opt-in replacement for a plain `print`: every positional
//! argument that is text goes through [`translate`](warna_markup::translate)
//! before being written, everything else is written through `Display`.
//! Nothing is overridden globally; call [`Printer`] or the
//! [`cprint!`](crate::cprint)/[`cprintln!`](crate::cprintln) macros
//! explicitly.

use std::borrow::Cow;
use std::io::{self, Write};

use warna_markup::translate_str;

use crate::error::Result;

/// A value the printer can write.
pub trait PrintArg {
    /// The text written for this argument.
    fn render(&self) -> String;
}

impl PrintArg for str {
    fn render(&self) -> String {
        translate_str(self)
    }
}

impl PrintArg for String {
    fn render(&self) -> String {
        translate_str(self)
    }
}

impl PrintArg for Cow<'_, str> {
    fn render(&self) -> String {
        translate_str(self)
    }
}

impl<T: PrintArg + ?Sized> PrintArg for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

macro_rules! display_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrintArg for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Options shared by every [`Printer::print`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Written between arguments. Not translated.
    pub sep: String,
    /// Written after the last argument. Not translated.
    pub end: String,
    /// Flush the writer after each call.
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
            flush: false,
        }
    }
}

/// Writes translated arguments to a stream.
///
/// # Examples
///
/// ```
/// use warna::Printer;
///
/// let mut printer = Printer::new(Vec::new()).sep(", ").end("");
/// printer.print(&[&"{RED}a", &1]).unwrap();
/// assert_eq!(printer.into_inner(), b"\x1b[31ma\x1b[0m, 1");
/// ```
#[derive(Debug)]
pub struct Printer<W: Write> {
    writer: W,
    options: PrintOptions,
}

impl Printer<io::Stdout> {
    /// A printer for standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Printer<io::Stderr> {
    /// A printer for standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Printer<W> {
    /// A printer with default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, PrintOptions::default())
    }

    /// A printer with the given options.
    pub fn with_options(writer: W, options: PrintOptions) -> Self {
        Self { writer, options }
    }

    /// Set the separator.
    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.options.sep = sep.into();
        self
    }

    /// Set the terminator.
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.options.end = end.into();
        self
    }

    /// Flush after every call.
    pub fn flush(mut self, flush: bool) -> Self {
        self.options.flush = flush;
        self
    }

    /// Get the options.
    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Translate each argument independently, join them with the separator,
    /// and write the result followed by the terminator.
    pub fn print(&mut self, args: &[&dyn PrintArg]) -> Result<()> {
        let mut line = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.options.sep);
            }
            line.push_str(&arg.render());
        }
        line.push_str(&self.options.end);

        self.writer.write_all(line.as_bytes())?;
        if self.options.flush {
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Get the writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the printer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Print translated arguments to standard output, without a newline.
///
/// Evaluates to [`warna::Result<()>`](crate::Result).
#[macro_export]
macro_rules! cprint {
    ($($arg:expr),* $(,)?) => {
        $crate::print::Printer::stdout()
            .end("")
            .print(&[$(&$arg as &dyn $crate::print::PrintArg),*])
    };
}

/// Print translated arguments to standard output, followed by a newline.
///
/// Evaluates to [`warna::Result<()>`](crate::Result).
#[macro_export]
macro_rules! cprintln {
    ($($arg:expr),* $(,)?) => {
        $crate::print::Printer::stdout().print(&[$(&$arg as &dyn $crate::print::PrintArg),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn default_options() {
        let options = PrintOptions::default();
        assert_eq!(options.sep, " ");
        assert_eq!(options.end, "\n");
        assert!(!options.flush);
    }

    #[test]
    fn each_text_argument_gets_its_own_reset() {
        let mut printer = Printer::new(Vec::new());
        printer.print(&[&"{RED}a", &"{BLUE}b"]).unwrap();
        assert_eq!(
            printed(printer),
            "\x1b[31ma\x1b[0m \x1b[34mb\x1b[0m\n"
        );
    }

    #[test]
    fn non_text_arguments_are_not_translated() {
        let mut printer = Printer::new(Vec::new());
        printer.print(&[&42, &true, &'x', &1.5]).unwrap();
        assert_eq!(printed(printer), "42 true x 1.5\n");
    }

    #[test]
    fn separator_and_terminator_are_literal() {
        let mut printer = Printer::new(Vec::new()).sep("{RED}").end("{RESET}");
        printer.print(&[&"a", &"b"]).unwrap();
        assert_eq!(printed(printer), "a\x1b[0m{RED}b\x1b[0m{RESET}");
    }

    #[test]
    fn no_arguments_writes_terminator_only() {
        let mut printer = Printer::new(Vec::new());
        printer.print(&[]).unwrap();
        assert_eq!(printed(printer), "\n");
    }

    #[test]
    fn string_and_cow_arguments() {
        let owned = String::from("{GREEN}");
        let cow: Cow<'_, str> = Cow::Borrowed("{CYAN}");
        let mut printer = Printer::new(Vec::new()).end("");
        printer.print(&[&owned, &cow]).unwrap();
        assert_eq!(printed(printer), "\x1b[32m\x1b[0m \x1b[36m\x1b[0m");
    }

    #[test]
    fn repeated_calls_append() {
        let mut printer = Printer::new(Vec::new()).flush(true);
        printer.print(&[&"a"]).unwrap();
        printer.print(&[&"b"]).unwrap();
        assert_eq!(printed(printer), "a\x1b[0m\nb\x1b[0m\n");
    }
}
