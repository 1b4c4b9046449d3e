//! On-screen event log
//!
//! The log is one string with the newest entry first. After every append the
//! newest entry carries a highlight span covering exactly its own text; the
//! separator and older entries are never highlighted.

use parking_lot::Mutex;
use std::ops::Range;
use std::sync::Arc;
use tracing::trace;

/// Character range of the newest entry, `[start, end)` in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// First highlighted byte
    pub start: usize,
    /// One past the last highlighted byte
    pub end: usize,
}

impl HighlightSpan {
    /// Span as a range usable for slicing the log text
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A piece of the log text with its presentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSegment<'a> {
    /// Text of the segment
    pub text: &'a str,
    /// Whether the segment is rendered with the highlight style
    pub highlighted: bool,
}

/// Rendering snapshot: the newest entry and everything below it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSnapshot {
    /// Newest entry (highlighted)
    pub latest: String,
    /// Older entries, newest first, separated by newlines
    pub older: String,
}

/// Newest-first text log with a highlight on the latest entry
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    text: String,
    highlight: Option<HighlightSpan>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `entry` followed by a newline and move the highlight onto it
    pub fn append(&mut self, entry: &str) {
        let mut text = String::with_capacity(entry.len() + 1 + self.text.len());
        text.push_str(entry);
        text.push('\n');
        text.push_str(&self.text);

        self.text = text;
        self.highlight = Some(HighlightSpan {
            start: 0,
            end: entry.len(),
        });
    }

    /// Empty the log
    pub fn clear(&mut self) {
        self.text.clear();
        self.highlight = None;
    }

    /// Full log text, newest entry first
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Highlight of the newest entry; `None` when empty or just cleared
    pub fn highlight(&self) -> Option<HighlightSpan> {
        self.highlight
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// The text split into highlighted and plain segments, empty ones omitted
    pub fn styled(&self) -> Vec<StyledSegment<'_>> {
        let (head, tail) = match self.highlight {
            Some(span) => (&self.text[span.range()], &self.text[span.end..]),
            None => ("", self.text.as_str()),
        };

        [
            StyledSegment {
                text: head,
                highlighted: true,
            },
            StyledSegment {
                text: tail,
                highlighted: false,
            },
        ]
        .into_iter()
        .filter(|segment| !segment.text.is_empty())
        .collect()
    }

    /// Rendering snapshot built from [`styled`](Self::styled)
    ///
    /// The highlighted segment becomes `latest`; the plain segment becomes
    /// `older` without the separator after the newest entry or the trailing
    /// newline.
    pub fn snapshot(&self) -> LogSnapshot {
        let mut snapshot = LogSnapshot::default();
        for segment in self.styled() {
            if segment.highlighted {
                snapshot.latest = segment.text.to_string();
            } else {
                let rest = if self.highlight.is_some() {
                    segment.text.strip_prefix('\n').unwrap_or(segment.text)
                } else {
                    segment.text
                };
                snapshot.older = rest.trim_end_matches('\n').to_string();
            }
        }
        snapshot
    }
}

/// Shared handle to an [`EventLog`]
///
/// The touch listener and the gesture listener both append through clones of
/// the same handle.
#[derive(Debug, Clone, Default)]
pub struct EventLogHandle {
    inner: Arc<Mutex<EventLog>>,
}

impl EventLogHandle {
    /// Create a handle to a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry
    pub fn append(&self, entry: &str) {
        trace!("Log entry: {}", entry);
        self.inner.lock().append(entry);
    }

    /// Empty the log
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copy of the full text
    pub fn text(&self) -> String {
        self.inner.lock().text().to_string()
    }

    /// Highlight of the newest entry
    pub fn highlight(&self) -> Option<HighlightSpan> {
        self.inner.lock().highlight()
    }

    /// Entries, newest first
    pub fn entries(&self) -> Vec<String> {
        self.inner.lock().entries().map(str::to_string).collect()
    }

    /// Rendering snapshot
    pub fn snapshot(&self) -> LogSnapshot {
        self.inner.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_prepends_with_separator() {
        let mut log = EventLog::new();
        log.append("a");
        assert_eq!(log.text(), "a\n");
        log.append("b");
        assert_eq!(log.text(), "b\na\n");
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_highlight_covers_only_newest_entry() {
        let mut log = EventLog::new();
        log.append("in onTouch");
        log.append("in onFling");

        let span = log.highlight().unwrap();
        assert_eq!(span, HighlightSpan { start: 0, end: 10 });
        assert_eq!(&log.text()[span.range()], "in onFling");
        assert_eq!(log.text().as_bytes()[span.end], b'\n');
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut log = EventLog::new();
        for i in 0..100 {
            log.append(&format!("entry {i}"));
        }
        log.clear();

        assert_eq!(log.text(), "");
        assert_eq!(log.highlight(), None);
        assert!(log.styled().is_empty());
    }

    #[test]
    fn test_styled_segments() {
        let mut log = EventLog::new();
        log.append("old");
        log.append("new");

        assert_eq!(
            log.styled(),
            vec![
                StyledSegment {
                    text: "new",
                    highlighted: true
                },
                StyledSegment {
                    text: "\nold\n",
                    highlighted: false
                },
            ]
        );
    }

    #[test]
    fn test_empty_entry_has_empty_highlight() {
        let mut log = EventLog::new();
        log.append("x");
        log.append("");

        let span = log.highlight().unwrap();
        assert_eq!(span, HighlightSpan { start: 0, end: 0 });
        assert_eq!(log.text(), "\nx\n");
        assert_eq!(
            log.styled(),
            vec![StyledSegment {
                text: "\nx\n",
                highlighted: false
            }]
        );
        assert_eq!(
            log.snapshot(),
            LogSnapshot {
                latest: String::new(),
                older: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_snapshot_splits_latest_from_older() {
        let mut log = EventLog::new();
        assert_eq!(log.snapshot(), LogSnapshot::default());

        log.append("first");
        assert_eq!(
            log.snapshot(),
            LogSnapshot {
                latest: "first".to_string(),
                older: String::new(),
            }
        );

        log.append("second");
        log.append("third");
        assert_eq!(
            log.snapshot(),
            LogSnapshot {
                latest: "third".to_string(),
                older: "second\nfirst".to_string(),
            }
        );
    }

    #[test]
    fn test_handle_clones_share_log() {
        let handle = EventLogHandle::new();
        let other = handle.clone();
        handle.append("a");
        other.append("b");

        assert_eq!(handle.entries(), vec!["b", "a"]);
        assert_eq!(other.highlight(), Some(HighlightSpan { start: 0, end: 1 }));
        assert!(handle.text().starts_with("b\n"));

        other.clear();
        assert_eq!(handle.text(), "");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the text always starts with the newest entry and a newline
            #[test]
            fn text_starts_with_newest_entry(
                entries in prop::collection::vec("[a-zA-Z0-9 =(),.-]{0,24}", 1..20)
            ) {
                let mut log = EventLog::new();
                for entry in &entries {
                    log.append(entry);
                    let expected_prefix = format!("{entry}\n");
                    prop_assert!(log.text().starts_with(&expected_prefix));
                }
            }

            /// Property: the highlight is exactly [0, len(entry))
            #[test]
            fn highlight_matches_newest_entry(
                entries in prop::collection::vec("[a-zA-Z0-9 =(),.-]{0,24}", 1..20)
            ) {
                let mut log = EventLog::new();
                for entry in &entries {
                    log.append(entry);
                    let span = log.highlight().unwrap();
                    prop_assert_eq!(span.start, 0);
                    prop_assert_eq!(span.end, entry.len());
                    prop_assert_eq!(&log.text()[span.range()], entry.as_str());
                }
            }

            /// Property: history is kept in full, newest first
            #[test]
            fn history_is_newest_first(
                entries in prop::collection::vec("[a-z]{1,8}", 1..20)
            ) {
                let mut log = EventLog::new();
                for entry in &entries {
                    log.append(entry);
                }
                let expected: Vec<&str> = entries.iter().rev().map(String::as_str).collect();
                prop_assert_eq!(log.entries().collect::<Vec<_>>(), expected);
            }

            /// Property: the snapshot shows the highlighted segment as the latest entry
            #[test]
            fn snapshot_latest_is_highlighted_segment(
                entries in prop::collection::vec("[a-z]{1,8}", 1..20)
            ) {
                let mut log = EventLog::new();
                for entry in &entries {
                    log.append(entry);
                }
                let styled = log.styled();
                prop_assert!(styled[0].highlighted);
                let snapshot = log.snapshot();
                prop_assert_eq!(snapshot.latest.as_str(), styled[0].text);
                let older: Vec<&str> = log.entries().skip(1).collect();
                prop_assert_eq!(snapshot.older, older.join("\n"));
            }

            /// Property: clear always yields an empty log
            #[test]
            fn clear_always_empties(count in 0usize..200) {
                let mut log = EventLog::new();
                for i in 0..count {
                    log.append(&i.to_string());
                }
                log.clear();
                prop_assert_eq!(log.text(), "");
            }
        }
    }
}
