//! Trace Writer
//!
//! Append-only JSONL export of narration entries.

use std::io::{self, BufWriter, Write};

use career_events::LogEntry;

/// Writes log entries as JSON lines to any writer
pub struct TraceWriter<W: Write> {
    writer: Option<BufWriter<W>>,
    entry_count: u64,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(BufWriter::new(writer)),
            entry_count: 0,
        }
    }

    /// Get the number of entries written
    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }

    pub fn write(&mut self, entry: &LogEntry) -> io::Result<()> {
        self.entry_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    pub fn write_batch(&mut self, entries: &[LogEntry]) -> io::Result<()> {
        for entry in entries {
            self.write(entry)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> io::Result<W> {
        match self.writer.take() {
            Some(writer) => writer.into_inner().map_err(|e| e.into_error()),
            None => Err(io::Error::new(io::ErrorKind::Other, "trace writer already closed")),
        }
    }
}

impl<W: Write> Drop for TraceWriter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush trace writer: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_events::{EntryKind, TurnLabel};

    #[test]
    fn test_trace_lines() {
        let mut trace = TraceWriter::new(Vec::new());
        let entry = LogEntry::new("msg_00000001", EntryKind::Notice, "hello", TurnLabel::Month(1));
        trace.write(&entry).unwrap();
        trace.write(&entry).unwrap();
        assert_eq!(trace.entry_count(), 2);

        let bytes = trace.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: LogEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, entry);
    }
}
