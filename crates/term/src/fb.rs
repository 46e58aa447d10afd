//! Framebuffer and style types for terminal rendering.

/// 24-bit color as (red, green, blue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Per-cell styling: colors plus bold/dim attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb(220, 220, 220), Rgb::BLACK)
    }
}

/// One character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// Grid of styled cells, stored row by row.
///
/// Every write is clipped to the buffer; out-of-range coordinates are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions. The allocation is reused; contents are unspecified
    /// afterwards, so callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = usize::from(width) * usize::from(height);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn row(&self, y: u16) -> Option<&[Cell]> {
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        (y < self.height).then(|| &self.cells[start..start + w])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        if y < self.height {
            Some(&mut self.cells[start..start + w])
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(usize::from(x)).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(usize::from(x))) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::new(ch, style));
    }

    /// Write `s` from (x, y), clipped at the right edge.
    ///
    /// Returns the column after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let Some(row) = self.row_mut(y) else {
            return x;
        };
        let mut cx = x;
        for (slot, ch) in row.iter_mut().skip(usize::from(x)).zip(s.chars()) {
            *slot = Cell::new(ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        // ASCII digits are always valid UTF-8.
        let text = std::str::from_utf8(&digits[start..]).unwrap_or("");
        self.put_str(x, y, text, style)
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x0 = usize::from(x).min(usize::from(self.width));
        let x1 = (usize::from(x) + usize::from(w)).min(usize::from(self.width));
        for row_y in y..y.saturating_add(h).min(self.height) {
            if let Some(row) = self.row_mut(row_y) {
                row[x0..x1].fill(Cell::new(ch, style));
            }
        }
    }

    /// Characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|cell| cell.ch).collect())
            .unwrap_or_default()
    }
}
