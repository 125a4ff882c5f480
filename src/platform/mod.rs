pub mod serial_log;
pub mod vga;
