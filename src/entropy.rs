/// Anything that can hand the game a fresh seed.
pub trait SeedSource {
    fn seed(&mut self) -> u32;
}

// Time stamp counter. Free running since power on, so the moment the player
// boots (or presses 'r') is all the randomness we get. Not for crypto.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleCounter;

impl SeedSource for CycleCounter {
    #[allow(unused_unsafe)]
    fn seed(&mut self) -> u32 {
        fold(unsafe { core::arch::x86_64::_rdtsc() })
    }
}

/// The same seed every time, for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn seed(&mut self) -> u32 {
        self.0
    }
}

// lo ^ hi of the 64 bit counter
pub const fn fold(ticks: u64) -> u32 {
    (ticks as u32) ^ ((ticks >> 32) as u32)
}
