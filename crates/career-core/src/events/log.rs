//! Message Log
//!
//! Append-only narration sink. Every entry is kept; front ends that only
//! show the latest few ask for a window.

use career_events::{EntryKind, LogEntry, TurnLabel};

/// Entries shown at once by the reference front end
pub const DEFAULT_DISPLAY_WINDOW: usize = 20;

#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
    next_entry_id: u64,
    display_window: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_WINDOW)
    }
}

impl MessageLog {
    pub fn new(display_window: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_entry_id: 1,
            display_window: display_window.max(1),
        }
    }

    /// Generate the next entry ID
    fn next_id(&mut self) -> String {
        let id = format!("msg_{:08}", self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    /// Append an entry with the kind's default highlighting
    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>, turn_label: TurnLabel) -> &LogEntry {
        let id = self.next_id();
        self.append(LogEntry::new(id, kind, text, turn_label))
    }

    /// Append an entry with explicit highlighting
    pub fn push_highlighted(
        &mut self,
        kind: EntryKind,
        text: impl Into<String>,
        turn_label: TurnLabel,
        highlighted: bool,
    ) -> &LogEntry {
        let id = self.next_id();
        self.append(LogEntry::new(id, kind, text, turn_label).with_highlight(highlighted))
    }

    fn append(&mut self, entry: LogEntry) -> &LogEntry {
        tracing::trace!(id = %entry.id, kind = ?entry.kind, "{}", entry.text);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Entries appended after the first `count`, oldest first
    pub fn since(&self, count: usize) -> &[LogEntry] {
        &self.entries[count.min(self.entries.len())..]
    }

    /// Up to `n` most recent entries, newest first
    pub fn recent(&self, n: usize) -> Vec<&LogEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// The display window, newest first
    pub fn display(&self) -> Vec<&LogEntry> {
        self.recent(self.display_window)
    }

    pub fn display_window(&self) -> usize {
        self.display_window
    }

    /// Entries of one kind, oldest first
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_generation() {
        let mut log = MessageLog::default();
        assert_eq!(log.push(EntryKind::Notice, "a", TurnLabel::Month(1)).id, "msg_00000001");
        assert_eq!(log.push(EntryKind::Notice, "b", TurnLabel::Month(1)).id, "msg_00000002");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_nothing_is_dropped() {
        let mut log = MessageLog::new(3);
        for i in 0..30 {
            log.push(EntryKind::Action, format!("entry {}", i), TurnLabel::Month(1));
        }
        assert_eq!(log.len(), 30);
        let shown: Vec<&str> = log.display().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(shown, vec!["entry 29", "entry 28", "entry 27"]);
    }

    #[test]
    fn test_since() {
        let mut log = MessageLog::default();
        log.push(EntryKind::Notice, "old", TurnLabel::Month(1));
        let mark = log.len();
        log.push(EntryKind::Action, "new", TurnLabel::Month(1));
        assert_eq!(log.since(mark).len(), 1);
        assert_eq!(log.since(mark)[0].text, "new");
        assert!(log.since(99).is_empty());
    }

    #[test]
    fn test_highlight_override() {
        let mut log = MessageLog::default();
        let entry = log.push_highlighted(EntryKind::Notice, "!", TurnLabel::Final, true);
        assert!(entry.highlighted);
        assert_eq!(log.of_kind(EntryKind::Notice).count(), 1);
    }

    #[test]
    fn test_zero_window_is_raised() {
        assert_eq!(MessageLog::new(0).display_window(), 1);
    }
}
