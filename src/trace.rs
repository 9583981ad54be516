//! Plain-text trace of a processing run, one output sample per line.
//!
//! A debugging aid for eyeballing runs, not an interchange format.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `samples` to `path`, prefixed by a `Sample Count:` header line.
pub fn write_trace<P: AsRef<Path>>(samples: &[f32], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create trace file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Sample Count: {}", samples.len())
        .context("Failed to write trace header")?;
    for sample in samples {
        writeln!(writer, "{:.6}", sample).context("Failed to write trace sample")?;
    }
    writer.flush().context("Failed to flush trace file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_has_header_and_one_value_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");
        write_trace(&[0.0, 1.0, 1.0], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Sample Count: 3"));
        assert_eq!(lines.next(), Some("0.000000"));
        assert_eq!(lines.next(), Some("1.000000"));
        assert_eq!(lines.next(), Some("1.000000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_buffer_still_gets_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        write_trace(&[], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Sample Count: 0\n");
    }
}
