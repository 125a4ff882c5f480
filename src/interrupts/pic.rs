use super::InterruptLine;
use crate::io::PortIo;

// Everything here follows https://wiki.osdev.org/8259_PIC
// The BIOS leaves IRQ0-7 on vectors 8-15, right on top of the CPU fault
// vectors, so nothing may be unmasked until the pair has been remapped.

const PIC1_COMMAND: u16 = 0x20;
const PIC1_DATA: u16 = 0x21;
const PIC2_COMMAND: u16 = 0xA0;
const PIC2_DATA: u16 = 0xA1;

pub const PIC_1_OFFSET: u8 = 0x20;
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

// ICW1: edge triggered, cascaded, ICW4 follows
const ICW1_INIT: u8 = 0x11;
// ICW3: master has the slave on IRQ2, slave learns its identity is 2
const ICW3_SLAVE_ON_IRQ2: u8 = 0x04;
const ICW3_CASCADE_IDENTITY: u8 = 0x02;
// ICW4: 8086 mode
const ICW4_8086: u8 = 0x01;

const CASCADE_LINE: u8 = 2;
const MASK_ALL: u8 = 0xFF;
const EOI: u8 = 0x20;

/// Remaps both controllers to [`PIC_1_OFFSET`] / [`PIC_2_OFFSET`] and leaves
/// every line masked.
///
/// Runs once at boot. The ports are assumed to answer; there is nothing to
/// read back at this level.
pub fn configure(ports: &mut impl PortIo) {
    ports.write(PIC1_COMMAND, ICW1_INIT);
    ports.write(PIC2_COMMAND, ICW1_INIT);

    ports.write(PIC1_DATA, PIC_1_OFFSET);
    ports.write(PIC2_DATA, PIC_2_OFFSET);

    ports.write(PIC1_DATA, ICW3_SLAVE_ON_IRQ2);
    ports.write(PIC2_DATA, ICW3_CASCADE_IDENTITY);

    ports.write(PIC1_DATA, ICW4_8086);
    ports.write(PIC2_DATA, ICW4_8086);

    ports.write(PIC1_DATA, MASK_ALL);
    ports.write(PIC2_DATA, MASK_ALL);

    log::debug!(
        "pic remapped to {:#04x}/{:#04x}, all lines masked",
        PIC_1_OFFSET,
        PIC_2_OFFSET
    );
}

/// Unmasks `line` and keeps every other line masked.
///
/// Only call this once the vector table entry for `line` is live.
pub fn enable_only(ports: &mut impl PortIo, line: InterruptLine) {
    let (master, slave) = if line.on_slave() {
        // slave lines reach the core through the cascade line on the master
        (!(1 << CASCADE_LINE), !line.mask_bit())
    } else {
        (!line.mask_bit(), MASK_ALL)
    };
    ports.write(PIC1_DATA, master);
    ports.write(PIC2_DATA, slave);

    log::debug!(
        "irq {} enabled (masks {:#010b} {:#010b})",
        line.irq(),
        master,
        slave
    );
}

pub fn end_of_interrupt(ports: &mut impl PortIo, line: InterruptLine) {
    if line.on_slave() {
        ports.write(PIC2_COMMAND, EOI);
    }
    ports.write(PIC1_COMMAND, EOI);
}
