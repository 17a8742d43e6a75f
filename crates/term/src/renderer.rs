//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Frames are encoded into an owned byte buffer first and written with a
//! single `write_all`, so a frame never reaches the terminal half-drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::fb::{FrameBuffer, BLANK};
use crate::surface::{DoubleBuffer, ScreenSurface};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    needs_full: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            needs_full: true,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        tracing::debug!("terminal entered raw mode");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        tracing::debug!("terminal restored");
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    /// Show `next`, given that the terminal currently shows `prev`.
    pub fn draw(&mut self, prev: &FrameBuffer, next: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let full = self.needs_full || prev.width() != next.width() || prev.height() != next.height();
        if full {
            encode_full_into(next, &mut self.buf)?;
            self.needs_full = false;
        } else {
            encode_diff_into(prev, next, &mut self.buf)?;
        }
        tracing::trace!(full, bytes = self.buf.len(), "frame encoded");
        self.flush_buf()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.queue(Print(fb.get(x, y).unwrap_or(BLANK)))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(BLANK)))?;
        }
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

/// A [`ScreenSurface`] backed by a terminal.
///
/// Drawing goes to the back buffer. `present` sends only the cells that
/// differ from the front buffer, then swaps.
pub struct TerminalSurface<W: Write = io::Stdout> {
    buffers: DoubleBuffer,
    renderer: TerminalRenderer<W>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(renderer: TerminalRenderer<W>, width: u16, height: u16) -> Self {
        Self {
            buffers: DoubleBuffer::new(width, height),
            renderer,
        }
    }

    pub fn buffers(&self) -> &DoubleBuffer {
        &self.buffers
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }
}

impl<W: Write> ScreenSurface for TerminalSurface<W> {
    fn width(&self) -> u16 {
        self.buffers.width()
    }

    fn height(&self) -> u16 {
        self.buffers.height()
    }

    fn set(&mut self, x: u16, y: u16, ch: char) {
        self.buffers.set(x, y, ch);
    }

    fn clear(&mut self) {
        self.buffers.clear();
    }

    fn present(&mut self) -> Result<()> {
        let (front, back) = self.buffers.pair();
        self.renderer.draw(front, back)?;
        self.buffers.swap();
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        if width == self.width() && height == self.height() {
            return;
        }
        tracing::debug!(width, height, "surface resized");
        self.buffers.resize(width, height);
        self.renderer.invalidate();
    }
}
