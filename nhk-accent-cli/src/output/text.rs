//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use nhk_accent_core::{FormatOptions, LookupOutput};
use std::io::{self, Write};

/// Plain text formatter - writes the joined markup of each lookup
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(options: FormatOptions) -> Self {
        Self::new(io::stdout(), options)
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_lookup(&mut self, lookup: &LookupOutput) -> Result<()> {
        if lookup.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", self.options.format_lookup(lookup))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
