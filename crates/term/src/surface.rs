//! Drawing surfaces and double buffering.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// A grid of character cells that can be drawn into and then shown.
///
/// `set` never fails: coordinates outside `[0, width) × [0, height)` are
/// dropped. Callers that project geometry clip before calling it anyway.
pub trait ScreenSurface {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    fn set(&mut self, x: u16, y: u16, ch: char);

    /// Blank the drawing buffer.
    fn clear(&mut self);

    /// Make the current drawing visible.
    fn present(&mut self) -> Result<()>;

    fn resize(&mut self, width: u16, height: u16);

    /// Write a string left to right from `(x, y)`, truncated at the right edge.
    fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width() {
                break;
            }
            self.set(cx, y, ch);
            cx += 1;
        }
    }
}

/// Two framebuffers: one being drawn (back), one last shown (front).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleBuffer {
    buffers: [FrameBuffer; 2],
    back: usize,
}

impl DoubleBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffers: [FrameBuffer::new(width, height), FrameBuffer::new(width, height)],
            back: 0,
        }
    }

    pub fn back(&self) -> &FrameBuffer {
        &self.buffers[self.back]
    }

    pub fn back_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffers[self.back]
    }

    pub fn front(&self) -> &FrameBuffer {
        &self.buffers[1 - self.back]
    }

    /// Both buffers at once, `(front, back)`.
    pub fn pair(&self) -> (&FrameBuffer, &FrameBuffer) {
        (self.front(), self.back())
    }

    /// The back buffer becomes the front and vice versa.
    pub fn swap(&mut self) {
        self.back = 1 - self.back;
    }

    /// Resize both buffers and blank them.
    pub fn resize(&mut self, width: u16, height: u16) {
        for fb in &mut self.buffers {
            fb.resize(width, height);
            fb.clear();
        }
    }
}

impl ScreenSurface for DoubleBuffer {
    fn width(&self) -> u16 {
        self.back().width()
    }

    fn height(&self) -> u16 {
        self.back().height()
    }

    fn set(&mut self, x: u16, y: u16, ch: char) {
        self.back_mut().set(x, y, ch);
    }

    fn clear(&mut self) {
        self.back_mut().clear();
    }

    fn present(&mut self) -> Result<()> {
        self.swap();
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        DoubleBuffer::resize(self, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_swaps_back_to_front() {
        let mut surface = DoubleBuffer::new(4, 2);
        surface.set(1, 1, '*');
        assert_eq!(surface.front().get(1, 1), Some(' '));

        surface.present().unwrap();
        assert_eq!(surface.front().get(1, 1), Some('*'));
        // The old front is now the drawing buffer.
        assert_eq!(surface.back().get(1, 1), Some(' '));
    }

    #[test]
    fn clear_only_touches_back() {
        let mut surface = DoubleBuffer::new(2, 2);
        surface.set(0, 0, '*');
        surface.present().unwrap();
        surface.set(0, 0, '*');
        surface.clear();
        assert_eq!(surface.back().get(0, 0), Some(' '));
        assert_eq!(surface.front().get(0, 0), Some('*'));
    }

    #[test]
    fn put_str_default_method() {
        let mut surface = DoubleBuffer::new(5, 1);
        surface.put_str(3, 0, "abc");
        assert_eq!(surface.back().row(0), Some(&[' ', ' ', ' ', 'a', 'b'][..]));
    }

    #[test]
    fn resize_applies_to_both_buffers() {
        let mut surface = DoubleBuffer::new(2, 2);
        ScreenSurface::resize(&mut surface, 7, 3);
        let (front, back) = surface.pair();
        assert_eq!((front.width(), front.height()), (7, 3));
        assert_eq!((back.width(), back.height()), (7, 3));
    }
}
