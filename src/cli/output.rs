//! Output formatting utilities

use crate::domain::Excerpt;
use colored::Colorize;
use std::io::{self, Write};

/// Write the looked-up key as an inverted banner line
pub fn write_banner<W: Write>(out: &mut W, key: &str) -> io::Result<()> {
    writeln!(out, "{}", key.bold().reversed())
}

/// Write an excerpt: bold heading, then the body lines as-is
pub fn write_excerpt<W: Write>(out: &mut W, excerpt: &Excerpt) -> io::Result<()> {
    writeln!(out, "{}", excerpt.heading.as_str().bold())?;
    for line in &excerpt.body {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write plain lines, one per entry
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
