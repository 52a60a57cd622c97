//! Terminal picker built on crossterm.
//!
//! The prompt draws on stderr so stdout stays reserved for the final
//! rendered oneliner. Raw mode is held for the duration of the event loop
//! and released by an RAII guard on every exit path, including panics and
//! early error returns.
//!
//! Keys: type to filter, Up/Down or Ctrl-P/Ctrl-N to move, Enter to
//! confirm, Esc or Ctrl-C to cancel. Cancellation is reported as
//! [`Outcome::Cancelled`], never as an error.

use crate::error::{Result, SnagError};
use crate::scan::FileEntry;
use crate::select::{filter_indices, scroll_offset, Outcome};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Write};

/// Restores the terminal when dropped, no matter how the picker exits.
struct TermGuard;

impl TermGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().map_err(term_err)?;
        crossterm::execute!(io::stderr(), cursor::Hide).map_err(term_err)?;
        Ok(Self)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        // Failure here is safe to ignore; the process is leaving the prompt.
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stderr(), cursor::Show);
    }
}

fn term_err(e: io::Error) -> SnagError {
    SnagError::Selector(format!("terminal error: {}", e))
}

/// Interactive, searchable list picker over a sequence of file entries.
pub struct Picker<'a> {
    label: &'a str,
    items: &'a [FileEntry],
    page_size: usize,
}

impl<'a> Picker<'a> {
    pub fn new(label: &'a str, items: &'a [FileEntry]) -> Self {
        Self {
            label,
            items,
            page_size: 10,
        }
    }

    /// Override the number of visible list rows.
    #[allow(dead_code)]
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Run the picker until the operator confirms or cancels.
    ///
    /// `detail` renders the extra text block shown beneath the list for the
    /// currently highlighted entry; a render failure there is fatal.
    pub fn run<F>(&self, detail: F) -> Result<Outcome>
    where
        F: Fn(&FileEntry) -> Result<String>,
    {
        if self.items.is_empty() {
            return Err(SnagError::NoItems("the selection list is empty".to_string()));
        }

        let _guard = TermGuard::acquire()?;
        let mut stderr = io::stderr();

        let mut query = String::new();
        let mut cursor = 0usize;
        let mut offset = 0usize;
        let mut drawn = 0u16;

        let outcome = loop {
            let filtered = filter_indices(self.items, &query);
            if cursor >= filtered.len() {
                cursor = filtered.len().saturating_sub(1);
            }
            offset = scroll_offset(offset, cursor, self.page_size);

            let detail_text = match filtered.get(cursor) {
                Some(&idx) => Some(detail(&self.items[idx])?),
                None => None,
            };

            drawn = self
                .draw(
                    &mut stderr,
                    drawn,
                    &query,
                    &filtered,
                    cursor,
                    offset,
                    detail_text.as_deref(),
                )
                .map_err(term_err)?;

            match event::read().map_err(term_err)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match (key.code, key.modifiers) {
                        (KeyCode::Esc, _) => break Outcome::Cancelled,
                        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                            break Outcome::Cancelled;
                        }
                        (KeyCode::Enter, _) => {
                            if let Some(&idx) = filtered.get(cursor) {
                                break Outcome::Confirmed(idx);
                            }
                        }
                        (KeyCode::Up, _) => cursor = cursor.saturating_sub(1),
                        (KeyCode::Char('p'), m) if m.contains(KeyModifiers::CONTROL) => {
                            cursor = cursor.saturating_sub(1);
                        }
                        (KeyCode::Down, _) => {
                            if cursor + 1 < filtered.len() {
                                cursor += 1;
                            }
                        }
                        (KeyCode::Char('n'), m) if m.contains(KeyModifiers::CONTROL) => {
                            if cursor + 1 < filtered.len() {
                                cursor += 1;
                            }
                        }
                        (KeyCode::Backspace, _) => {
                            query.pop();
                            cursor = 0;
                            offset = 0;
                        }
                        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                            query.push(c);
                            cursor = 0;
                            offset = 0;
                        }
                        _ => {}
                    }
                }
                // Redraw on resize and ignore everything else
                _ => {}
            }
        };

        erase(&mut stderr, drawn).map_err(term_err)?;
        Ok(outcome)
    }

    /// Draw one frame, replacing the previous one, and return the number of
    /// lines drawn.
    #[allow(clippy::too_many_arguments)]
    fn draw(
        &self,
        w: &mut impl Write,
        prev: u16,
        query: &str,
        filtered: &[usize],
        cursor: usize,
        offset: usize,
        detail: Option<&str>,
    ) -> io::Result<u16> {
        if prev > 0 {
            queue!(w, cursor::MoveToPreviousLine(prev))?;
        }
        queue!(w, cursor::MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

        let mut lines = 0u16;

        queue!(
            w,
            SetAttribute(Attribute::Bold),
            Print(self.label),
            SetAttribute(Attribute::Reset),
            Print(": "),
            Print(query),
            Print("\r\n"),
        )?;
        lines += 1;

        if filtered.is_empty() {
            queue!(
                w,
                SetAttribute(Attribute::Dim),
                Print("  (no matches)"),
                SetAttribute(Attribute::Reset),
                Print("\r\n"),
            )?;
            lines += 1;
        } else {
            let end = (offset + self.page_size).min(filtered.len());
            for (row, &idx) in filtered[offset..end].iter().enumerate() {
                let item = &self.items[idx];
                let active = offset + row == cursor;
                if active {
                    queue!(
                        w,
                        SetAttribute(Attribute::Bold),
                        Print("> "),
                        SetAttribute(Attribute::Reset),
                    )?;
                } else {
                    queue!(w, Print("  "))?;
                }
                queue!(
                    w,
                    SetForegroundColor(Color::Cyan),
                    Print(&item.name),
                    ResetColor,
                    Print(" ("),
                    SetForegroundColor(Color::Red),
                    Print(&item.path),
                    ResetColor,
                    Print(")\r\n"),
                )?;
                lines += 1;
            }
        }

        if let Some(detail) = detail {
            for line in detail.lines() {
                queue!(w, Print(line), Print("\r\n"))?;
                lines += 1;
            }
        }

        w.flush()?;
        Ok(lines)
    }
}

/// Remove the prompt UI from the screen.
fn erase(w: &mut impl Write, drawn: u16) -> io::Result<()> {
    if drawn > 0 {
        queue!(w, cursor::MoveToPreviousLine(drawn))?;
    }
    queue!(w, cursor::MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    w.flush()
}
