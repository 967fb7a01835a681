// src/animation/sink.rs
use console::{measure_text_width, Term};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A write-only text surface. Each call replaces the visible text.
pub trait DisplaySink: Send + Sync {
    fn set_text(&self, text: &str) -> io::Result<()>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for Arc<T> {
    fn set_text(&self, text: &str) -> io::Result<()> {
        (**self).set_text(text)
    }
}

/// Rewrites the current terminal line on every frame.
///
/// Frames wider than the terminal wrap onto several rows; all of them are
/// cleared before the next frame is drawn.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    term: Term,
    last_rows: Arc<AtomicUsize>,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            last_rows: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Hide the cursor so it does not flicker over the shuffling line.
    pub fn begin(&self) -> io::Result<()> {
        self.last_rows.store(0, Ordering::SeqCst);
        self.term.hide_cursor()
    }

    /// Move past the revealed line and restore the cursor.
    pub fn finish(&self) -> io::Result<()> {
        self.last_rows.store(0, Ordering::SeqCst);
        self.term.write_line("")?;
        self.term.show_cursor()
    }
}

/// Rows a line of `width` columns occupies on a terminal `columns` wide.
fn rows_for(width: usize, columns: usize) -> usize {
    if width == 0 || columns == 0 {
        return 1;
    }
    (width + columns - 1) / columns
}

impl DisplaySink for TerminalSink {
    fn set_text(&self, text: &str) -> io::Result<()> {
        let (_, columns) = self.term.size();
        let rows = rows_for(measure_text_width(text), columns as usize);
        let previous = self.last_rows.swap(rows, Ordering::SeqCst);

        self.term.clear_line()?;
        if previous > 1 {
            self.term.clear_last_lines(previous - 1)?;
        }
        self.term.write_str(text)?;
        self.term.flush()
    }
}

/// Keeps every frame written to it.
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current visible text.
    pub fn text(&self) -> Option<String> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl DisplaySink for MemorySink {
    fn set_text(&self, text: &str) -> io::Result<()> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_frames() {
        let sink = MemorySink::new();
        assert_eq!(sink.text(), None);

        sink.set_text("x1").unwrap();
        sink.set_text("ab").unwrap();

        assert_eq!(sink.frames(), vec!["x1".to_string(), "ab".to_string()]);
        assert_eq!(sink.text().as_deref(), Some("ab"));
    }

    #[test]
    fn test_rows_for_wrapped_frames() {
        assert_eq!(rows_for(0, 80), 1);
        assert_eq!(rows_for(16, 80), 1);
        assert_eq!(rows_for(80, 80), 1);
        assert_eq!(rows_for(81, 80), 2);
        assert_eq!(rows_for(100, 40), 3);
        assert_eq!(rows_for(100, 0), 1);
    }

    #[test]
    fn test_terminal_sink_tracks_wrapped_rows() {
        let sink = TerminalSink::stdout();
        let columns = sink.term.size().1 as usize;

        sink.set_text(&"x".repeat(columns * 2 + 1)).unwrap();
        assert_eq!(sink.last_rows.load(Ordering::SeqCst), 3);

        sink.set_text("short").unwrap();
        assert_eq!(sink.last_rows.load(Ordering::SeqCst), 1);

        sink.finish().unwrap();
        assert_eq!(sink.last_rows.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shared_sink_writes_through() {
        let sink = Arc::new(MemorySink::new());
        let shared: Arc<dyn DisplaySink> = sink.clone();

        shared.set_text("hello").unwrap();
        assert_eq!(sink.text().as_deref(), Some("hello"));
    }
}
