//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use nhk_accent_core::LookupOutput;
use std::io::Write;

/// JSON formatter - outputs lookups as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lookups: Vec<LookupOutput>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lookups: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_lookup(&mut self, lookup: &LookupOutput) -> Result<()> {
        self.lookups.push(lookup.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lookups)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhk_accent_core::{LookupEntry, RenderedPronunciation};

    #[test]
    fn test_outputs_array() {
        let lookup = LookupOutput {
            expression: "雨".to_string(),
            reading: None,
            entries: vec![LookupEntry {
                key: "雨".to_string(),
                pronunciations: vec![RenderedPronunciation {
                    markup: "<span class='pitch-high'>ア</span>".to_string(),
                    ends_high: true,
                }],
            }],
        };

        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.format_lookup(&lookup).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<LookupOutput> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![lookup]);
    }
}
