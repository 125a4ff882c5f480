#![no_std]
#![no_main]
#![feature(abi_x86_interrupt)]

mod platform;

use guessing_game_os::{
    display::Screen,
    entropy::CycleCounter,
    game::Game,
    interrupts::{pic, vectors, KEYBOARD_LINE},
    io::HardwarePorts,
    keyboard::scancodes::Us104Map,
    Kernel,
};
use lazy_static::lazy_static;
use platform::vga::VgaSurface;
use spin::Mutex;
use x86_64::{
    instructions::{hlt, interrupts},
    structures::idt::{InterruptDescriptorTable, InterruptStackFrame},
    VirtAddr,
};

type GuessingKernel = Kernel<HardwarePorts, Us104Map, VgaSurface, CycleCounter>;

// Filled in once by _start, then only ever locked from the keyboard handler.
static KERNEL: Mutex<Option<GuessingKernel>> = Mutex::new(None);

lazy_static! {
    static ref VECTORS: InterruptDescriptorTable = vectors::build(
        KEYBOARD_LINE,
        VirtAddr::new(keyboard_trampoline as usize as u64)
    );
}

#[no_mangle]
pub extern "C" fn _start() -> ! {
    platform::serial_log::init();

    {
        // IF is still clear here, nothing can contend for the lock
        let mut slot = KERNEL.lock();
        let game = Game::new(Screen::new(VgaSurface), CycleCounter);
        let kernel = slot.insert(Kernel::new(HardwarePorts, Us104Map, game));
        kernel.boot(|| vectors::install(&VECTORS));
    }

    interrupts::enable();
    cpu_loop()
}

fn cpu_loop() -> ! {
    loop {
        hlt();
    }
}

extern "x86-interrupt" fn keyboard_trampoline(_stack_frame: InterruptStackFrame) {
    // interrupt gate: IF stays clear until iretq, nothing below re-enables it
    debug_assert!(!interrupts::are_enabled());

    match KERNEL.try_lock() {
        Some(mut slot) => {
            if let Some(kernel) = slot.as_mut() {
                kernel.on_keyboard_interrupt();
                return;
            }
        }
        None => log::warn!("keyboard handler re-entered, event dropped"),
    }
    // still have to ack or the line stays blocked
    pic::end_of_interrupt(&mut HardwarePorts, KEYBOARD_LINE);
}
