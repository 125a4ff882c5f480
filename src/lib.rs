#![cfg_attr(not(test), no_std)]

// Number guessing on bare metal: one keyboard line, one 80x25 text screen.
// Everything in here is hardware independent apart from the two thin
// capabilities in `io` and `entropy`; main.rs does the wiring.

pub mod display;
pub mod entropy;
pub mod game;
pub mod interrupts;
pub mod io;
pub mod kernel;
pub mod keyboard;

pub use kernel::Kernel;
