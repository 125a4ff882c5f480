use x86_64::{structures::idt::InterruptDescriptorTable, PrivilegeLevel, VirtAddr};

use super::InterruptLine;

/// Number of gate descriptors the core consults.
pub const TABLE_SIZE: usize = 256;

/// Builds a table whose only live gate sends `line` to `handler`.
///
/// The gate is an interrupt gate at ring 0, so IF is cleared on entry and the
/// handler cannot be re-entered until it returns. Every other slot stays
/// not-present.
pub fn build(line: InterruptLine, handler: VirtAddr) -> InterruptDescriptorTable {
    let mut table = InterruptDescriptorTable::new();

    // handler must be the address of an extern "x86-interrupt" fn
    unsafe { table[line.vector()].set_handler_addr(handler) }
        .set_present(true)
        .set_privilege_level(PrivilegeLevel::Ring0)
        .disable_interrupts(true);

    table
}

/// Registers `table` with the core. It is never touched again afterwards.
pub fn install(table: &'static InterruptDescriptorTable) {
    table.load();
    log::debug!("vector table loaded at {:p}", table);
}
