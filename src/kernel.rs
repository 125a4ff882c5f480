use crate::{
    display::Surface,
    entropy::SeedSource,
    game::Game,
    interrupts::{pic, KEYBOARD_LINE},
    io::PortIo,
    keyboard::{self, scancodes::ScancodeMap, Dispatch},
};

/// Everything the keyboard interrupt touches, in one place.
///
/// Built once at program entry. From then on only the keyboard dispatch path
/// gets at it, so the game state and the display cursor have exactly one
/// owner.
pub struct Kernel<P, M, S, E> {
    ports: P,
    scancodes: M,
    game: Game<S, E>,
}

impl<P, M, S, E> Kernel<P, M, S, E>
where
    P: PortIo,
    M: ScancodeMap,
    S: Surface,
    E: SeedSource,
{
    pub fn new(ports: P, scancodes: M, game: Game<S, E>) -> Self {
        Self {
            ports,
            scancodes,
            game,
        }
    }

    pub fn game(&self) -> &Game<S, E> {
        &self.game
    }

    // `install` has to register the vector table. It runs while every line
    // is still masked, and the keyboard line only opens after it returns.
    pub fn boot(&mut self, install: impl FnOnce()) {
        self.game.start();
        pic::configure(&mut self.ports);
        install();
        pic::enable_only(&mut self.ports, KEYBOARD_LINE);
        log::info!(
            "guessing game up, target drawn, irq {} live",
            KEYBOARD_LINE.irq()
        );
    }

    pub fn on_keyboard_interrupt(&mut self) -> Dispatch {
        let game = &mut self.game;
        keyboard::dispatch(&mut self.ports, &self.scancodes, |event| {
            game.handle(event);
        })
    }
}
