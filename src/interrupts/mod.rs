pub mod pic;
pub mod vectors;

use pic::{PIC_1_OFFSET, PIC_2_OFFSET};

/// One device line (IRQ) on the chained 8259 pair, numbered 0 through 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptLine(u8);

impl InterruptLine {
    pub const fn new(irq: u8) -> Self {
        assert!(irq < 16);
        Self(irq)
    }

    pub const fn irq(self) -> u8 {
        self.0
    }

    // Where the line lands once the controllers are remapped.
    pub const fn vector(self) -> u8 {
        if self.on_slave() {
            PIC_2_OFFSET + (self.0 - 8)
        } else {
            PIC_1_OFFSET + self.0
        }
    }

    pub(crate) const fn on_slave(self) -> bool {
        self.0 >= 8
    }

    pub(crate) const fn mask_bit(self) -> u8 {
        1 << (self.0 % 8)
    }
}

// PS/2 keyboard
pub const KEYBOARD_LINE: InterruptLine = InterruptLine::new(1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_lands_past_the_cpu_exceptions() {
        assert_eq!(KEYBOARD_LINE.vector(), 0x21);
        assert!(KEYBOARD_LINE.vector() >= 32);
    }

    #[test]
    fn slave_lines_use_the_second_offset() {
        let rtc = InterruptLine::new(8);
        assert_eq!(rtc.vector(), 0x28);
        assert!(rtc.on_slave());
        assert_eq!(rtc.mask_bit(), 0b1);

        let mouse = InterruptLine::new(12);
        assert_eq!(mouse.vector(), 0x2C);
        assert_eq!(mouse.mask_bit(), 0b1_0000);
    }
}
