//! Line-oriented console writer.
//!
//! Every line goes straight to the underlying writer, so whatever was printed
//! before a fatal error stays printed. The console only decides where blank
//! separator lines go: one before each lesson and each exercise, none directly
//! after a lesson heading, none at the very start or end.

use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Nothing,
    Heading,
    Line,
}

pub struct Console<W: Write> {
    out: W,
    last: Last,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: Last::Nothing,
        }
    }

    pub fn lesson_heading(&mut self, number: usize, title: &str) -> std::io::Result<()> {
        if self.last != Last::Nothing {
            writeln!(self.out)?;
        }
        writeln!(self.out, "=== Lesson {number}: {title} ===")?;
        self.last = Last::Heading;
        Ok(())
    }

    pub fn exercise_heading(&mut self, number: usize, title: &str) -> std::io::Result<()> {
        if self.last == Last::Line {
            writeln!(self.out)?;
        }
        writeln!(self.out, "- Exercise {number}. {title}")?;
        self.last = Last::Heading;
        Ok(())
    }

    pub fn line(&mut self, args: fmt::Arguments<'_>) -> std::io::Result<()> {
        self.out.write_fmt(args)?;
        writeln!(self.out)?;
        self.last = Last::Line;
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `say!(console, "fmt", args..)` writes one formatted line.
#[macro_export]
macro_rules! say {
    ($console:expr, $($arg:tt)*) => {
        $console.line(format_args!($($arg)*))
    };
}
