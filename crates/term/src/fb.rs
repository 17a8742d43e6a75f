//! Character framebuffer.

/// Character used for an empty cell.
pub const BLANK: char = ' ';

/// 2D grid of character cells, row-major, `(0, 0)` at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Contents after
    /// a size change are unspecified until the next [`clear`](Self::clear).
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, BLANK);
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn clear(&mut self) {
        self.fill(BLANK);
    }

    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    pub fn row(&self, y: u16) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Positions of every cell holding `ch`, in row-major order.
    pub fn positions_of(&self, ch: char) -> Vec<(u16, u16)> {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == ch)
            .map(|(i, _)| ((i % w) as u16, (i / w) as u16))
            .collect()
    }
}
