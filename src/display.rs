// A cursor over the 80x25 text grid. The grid itself (0xb8000 on real
// hardware) lives behind `Surface`, so the only address math here is turning
// a cell index into a column and a row.

pub const ROWS: usize = 25;
pub const COLS: usize = 80;
const CELLS: usize = ROWS * COLS;

// Standard VGA text mode palette, in attribute nibble order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGray,
        Color::DarkGray,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::Pink,
        Color::Yellow,
        Color::White,
    ];

    fn from_nibble(nibble: u8) -> Self {
        Self::ALL[(nibble & 0x0F) as usize]
    }
}

/// The attribute byte of a cell: background in the high nibble, foreground
/// in the low one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    pub const DEFAULT: Attribute = Attribute::on_black(Color::LightGray);

    pub const fn new(foreground: Color, background: Color) -> Self {
        Self((background as u8) << 4 | foreground as u8)
    }

    pub const fn on_black(foreground: Color) -> Self {
        Self::new(foreground, Color::Black)
    }

    pub fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    pub fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Raw cell storage. Implementations put one glyph with its attribute at a
/// column/row that is always inside the grid.
pub trait Surface {
    fn plot(&mut self, glyph: char, col: usize, row: usize, attr: Attribute);
}

pub struct Screen<S> {
    surface: S,
    // cell index, not a byte offset: one step is always exactly one cell
    cursor: usize,
}

impl<S: Surface> Screen<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // Past the last row the cell is dropped but the cursor still counts,
    // so a later retreat lands where it would have.
    pub fn write_cell(&mut self, glyph: char, attr: Attribute) {
        if self.cursor < CELLS {
            self.surface
                .plot(glyph, self.cursor % COLS, self.cursor / COLS, attr);
        }
        self.cursor = self.cursor.saturating_add(1);
    }

    pub fn write_str(&mut self, text: &str, attr: Attribute) {
        for c in text.chars() {
            if c == '\n' {
                self.line_break();
            } else {
                self.write_cell(c, attr);
            }
        }
    }

    pub fn write_line(&mut self, text: &str, attr: Attribute) {
        self.write_str(text, attr);
        self.line_break();
    }

    /// Sign first, then the most significant digit.
    pub fn write_decimal(&mut self, value: i32, attr: Attribute) {
        // u32::MAX has ten digits
        let mut digits = [0u8; 10];
        let mut len = 0;
        let mut magnitude = value.unsigned_abs();

        if value < 0 {
            self.write_cell('-', attr);
        }
        loop {
            digits[len] = (magnitude % 10) as u8;
            len += 1;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        for &d in digits[..len].iter().rev() {
            self.write_cell(char::from(b'0' + d), attr);
        }
    }

    pub fn line_break(&mut self) {
        self.cursor = (self.cursor / COLS + 1).saturating_mul(COLS);
    }

    pub fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        for row in 0..ROWS {
            for col in 0..COLS {
                self.surface.plot(' ', col, row, Attribute::DEFAULT);
            }
        }
        self.cursor = 0;
    }
}
