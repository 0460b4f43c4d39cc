//! TerminalSession: owns raw mode and the alternate screen, and pushes
//! canvases to stdout.
//!
//! Frames are diffed against the previous one; only changed runs of glyphs
//! are rewritten. A size change forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Rgb, Style};

pub struct TerminalSession {
    stdout: io::Stdout,
    prev: Option<Canvas>,
    buf: Vec<u8>,
    active: bool,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
            active: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Drop the remembered frame so the next `present` redraws everything.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Write `canvas` to the terminal.
    ///
    /// The canvas is swapped with the remembered frame afterwards, so the
    /// caller gets back a buffer it can render the next frame into.
    pub fn present(&mut self, canvas: &mut Canvas) -> Result<()> {
        self.buf.clear();
        match self.prev.take() {
            Some(prev) if prev.width() == canvas.width() && prev.height() == canvas.height() => {
                encode_diff_into(&prev, canvas, &mut self.buf)?;
                self.prev = Some(prev);
            }
            other => {
                encode_full_into(canvas, &mut self.buf)?;
                self.prev = other.or_else(|| Some(Canvas::new(0, 0)));
            }
        }
        self.flush_buf()?;

        if let Some(prev) = self.prev.as_mut() {
            std::mem::swap(prev, canvas);
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full redraw of `canvas` into `out`.
pub fn encode_full_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style: Option<Style> = None;
    for y in 0..canvas.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in canvas.row(y) {
            if style != Some(glyph.style) {
                queue_style(out, glyph.style)?;
                style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the glyph runs that differ between two same-sized canvases.
pub fn encode_diff_into(prev: &Canvas, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<Style> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        let row = next.row(y);
        for glyph in &row[x as usize..(x + len) as usize] {
            if style != Some(glyph.style) {
                queue_style(out, glyph.style)?;
                style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    if style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// `(x, y, len)` runs of changed glyphs, row by row.
///
/// Canvases of different sizes yield every row in full.
pub fn changed_runs(prev: &Canvas, next: &Canvas) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            runs.push((0, y, next.width()));
        }
        return runs;
    }

    for y in 0..next.height() {
        let (a, b) = (prev.row(y), next.row(y));
        let mut x = 0;
        while x < b.len() {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < b.len() && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y, (x - start) as u16));
        }
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_coalesce_adjacent_changes() {
        let a = Canvas::new(6, 2);
        let mut b = Canvas::new(6, 2);
        b.put_str(1, 0, "XYZ", Style::default());
        b.put(5, 1, '!', Style::default());

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_canvases_encode_nothing() {
        let mut a = Canvas::new(4, 3);
        a.put_str(0, 1, "abcd", Style::default());
        let b = a.clone();

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
        assert!(changed_runs(&a, &b).is_empty());
    }

    #[test]
    fn size_change_marks_every_row() {
        let a = Canvas::new(2, 2);
        let b = Canvas::new(3, 3);
        assert_eq!(changed_runs(&a, &b), vec![(0, 0, 3), (0, 1, 3), (0, 2, 3)]);
    }

    #[test]
    fn full_encode_contains_text() {
        let mut canvas = Canvas::new(5, 1);
        canvas.put_str(0, 0, "hello", Style::default().bold());

        let mut out = Vec::new();
        encode_full_into(&canvas, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('h'));
        assert!(text.contains('o'));
        assert_eq!(to_color(Rgb::new(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
