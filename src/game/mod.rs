use crate::{
    display::{Screen, Surface},
    entropy::SeedSource,
    keyboard::KeyEvent,
};

mod ui;

pub const MAX_ATTEMPTS: u8 = 10;
pub const MAX_DIGITS: u8 = 2;
pub const TARGET_RANGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    // won or out of attempts, waiting for 'r'
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooLow,
    TooHigh,
    Exhausted,
}

/// What a key did to the game. `Ignored` covers every key that is not
/// allowed right now; none of them are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Echoed(u8),
    Erased,
    Submitted(Verdict),
    Restarted,
    Redrawn,
}

// Digits typed for the guess in progress. `len == 0` always means `value == 0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    value: u8,
    len: u8,
}

impl Entry {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, digit: u8) -> bool {
        debug_assert!(digit < 10);
        if self.len >= MAX_DIGITS {
            return false;
        }
        self.value = self.value * 10 + digit;
        self.len += 1;
        true
    }

    fn pop(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.value /= 10;
        self.len -= 1;
        true
    }

    fn take(&mut self) -> u8 {
        core::mem::take(self).value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    target: u8,
    attempts: u8,
    input: Entry,
    phase: Phase,
}

impl GameState {
    fn new(target: u8) -> Self {
        Self {
            target,
            attempts: 0,
            input: Entry::default(),
            phase: Phase::Playing,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn input(&self) -> Entry {
        self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }
}

pub struct Game<S, E> {
    screen: Screen<S>,
    seeds: E,
    state: GameState,
}

impl<S: Surface, E: SeedSource> Game<S, E> {
    // Picks the first target but draws nothing, see `start`.
    pub fn new(screen: Screen<S>, mut seeds: E) -> Self {
        let target = draw_target(&mut seeds);
        Self {
            screen,
            seeds,
            state: GameState::new(target),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> &Screen<S> {
        &self.screen
    }

    pub fn start(&mut self) {
        self.screen.clear();
        ui::header(&mut self.screen);
        ui::prompt(&mut self.screen, self.state.attempts);
    }

    pub fn handle(&mut self, event: KeyEvent) -> Outcome {
        let outcome = match (self.state.phase, event) {
            (Phase::Over, KeyEvent::Restart) => self.restart(),
            (_, KeyEvent::ClearScreen) => self.redraw(),
            (Phase::Over, _) => Outcome::Ignored,
            (Phase::Playing, KeyEvent::Digit(d)) => self.type_digit(d),
            (Phase::Playing, KeyEvent::Backspace) => self.erase(),
            (Phase::Playing, KeyEvent::Enter) => self.submit(),
            (Phase::Playing, KeyEvent::Restart | KeyEvent::Other) => Outcome::Ignored,
        };
        log::debug!("{:?} -> {:?} ({:?})", event, outcome, self.state);
        outcome
    }

    fn restart(&mut self) -> Outcome {
        self.state = GameState::new(draw_target(&mut self.seeds));
        self.start();
        Outcome::Restarted
    }

    // Game state is left exactly as it was.
    fn redraw(&mut self) -> Outcome {
        self.screen.clear();
        ui::header(&mut self.screen);
        if self.state.phase == Phase::Playing {
            ui::prompt(&mut self.screen, self.state.attempts);
            ui::digits(&mut self.screen, self.state.input.value, self.state.input.len);
        }
        Outcome::Redrawn
    }

    fn type_digit(&mut self, digit: u8) -> Outcome {
        if !self.state.input.push(digit) {
            return Outcome::Ignored;
        }
        ui::digits(&mut self.screen, digit, 1);
        Outcome::Echoed(digit)
    }

    fn erase(&mut self) -> Outcome {
        if !self.state.input.pop() {
            return Outcome::Ignored;
        }
        ui::erase_last(&mut self.screen);
        Outcome::Erased
    }

    fn submit(&mut self) -> Outcome {
        if self.state.input.is_empty() {
            return Outcome::Ignored;
        }
        let guess = self.state.input.take();
        self.state.attempts += 1;

        let target = self.state.target;
        let verdict = if guess == target {
            Verdict::Correct
        } else if self.state.attempts >= MAX_ATTEMPTS {
            Verdict::Exhausted
        } else if guess < target {
            Verdict::TooLow
        } else {
            Verdict::TooHigh
        };

        self.screen.clear();
        ui::header(&mut self.screen);
        ui::feedback(&mut self.screen, guess, verdict);
        match verdict {
            Verdict::Correct => {
                ui::restart_hint(&mut self.screen);
                self.state.phase = Phase::Over;
            }
            Verdict::Exhausted => {
                ui::reveal(&mut self.screen, target);
                ui::restart_hint(&mut self.screen);
                self.state.phase = Phase::Over;
            }
            Verdict::TooLow | Verdict::TooHigh => {
                ui::prompt(&mut self.screen, self.state.attempts);
            }
        }
        Outcome::Submitted(verdict)
    }
}

fn draw_target(seeds: &mut impl SeedSource) -> u8 {
    (seeds.seed() % TARGET_RANGE) as u8
}
