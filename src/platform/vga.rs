use guessing_game_os::display::{Attribute, Color, Surface};
use pluggable_interrupt_os::vga_buffer::{plot, Color as VgaColor, ColorCode};

// The text buffer at 0xb8000, through pluggable_interrupt_os.
pub struct VgaSurface;

impl Surface for VgaSurface {
    fn plot(&mut self, glyph: char, col: usize, row: usize, attr: Attribute) {
        plot(
            glyph,
            col,
            row,
            ColorCode::new(vga_color(attr.foreground()), vga_color(attr.background())),
        );
    }
}

fn vga_color(color: Color) -> VgaColor {
    match color {
        Color::Black => VgaColor::Black,
        Color::Blue => VgaColor::Blue,
        Color::Green => VgaColor::Green,
        Color::Cyan => VgaColor::Cyan,
        Color::Red => VgaColor::Red,
        Color::Magenta => VgaColor::Magenta,
        Color::Brown => VgaColor::Brown,
        Color::LightGray => VgaColor::LightGray,
        Color::DarkGray => VgaColor::DarkGray,
        Color::LightBlue => VgaColor::LightBlue,
        Color::LightGreen => VgaColor::LightGreen,
        Color::LightCyan => VgaColor::LightCyan,
        Color::LightRed => VgaColor::LightRed,
        Color::Pink => VgaColor::Pink,
        Color::Yellow => VgaColor::Yellow,
        Color::White => VgaColor::White,
    }
}
