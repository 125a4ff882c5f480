use super::{Verdict, MAX_ATTEMPTS};
use crate::display::{Attribute, Color, Screen, Surface};

const TITLE: Attribute = Attribute::on_black(Color::LightCyan);
const BODY: Attribute = Attribute::DEFAULT;
const SUCCESS: Attribute = Attribute::on_black(Color::LightGreen);
const FAILURE: Attribute = Attribute::on_black(Color::LightRed);
const HINT: Attribute = Attribute::on_black(Color::Yellow);
const REVEAL: Attribute = Attribute::on_black(Color::White);

pub(super) fn header<S: Surface>(screen: &mut Screen<S>) {
    screen.write_line("Guess the Number (0-99)", TITLE);
    screen.write_line("Type a number and press ENTER. BACKSPACE erases.", BODY);
    screen.write_line("Press 'r' to restart and 'c' to clear the screen.", BODY);
    screen.line_break();
}

// "Attempt 3 of 10 => ", counting the attempt about to be made
pub(super) fn prompt<S: Surface>(screen: &mut Screen<S>, attempts: u8) {
    screen.write_str("Attempt ", BODY);
    screen.write_decimal(i32::from(attempts) + 1, BODY);
    screen.write_str(" of ", BODY);
    screen.write_decimal(i32::from(MAX_ATTEMPTS), BODY);
    screen.write_str(" => ", BODY);
}

// Zero padded to `len` so a typed leading zero survives a redraw.
pub(super) fn digits<S: Surface>(screen: &mut Screen<S>, value: u8, len: u8) {
    for place in (0..u32::from(len)).rev() {
        let digit = (u32::from(value) / 10u32.pow(place)) % 10;
        screen.write_cell(char::from(b'0' + digit as u8), BODY);
    }
}

pub(super) fn erase_last<S: Surface>(screen: &mut Screen<S>) {
    screen.retreat();
    screen.write_cell(' ', BODY);
    screen.retreat();
}

pub(super) fn feedback<S: Surface>(screen: &mut Screen<S>, guess: u8, verdict: Verdict) {
    let (message, attr) = match verdict {
        Verdict::Correct => ("CORRECT! :)", SUCCESS),
        Verdict::Exhausted => ("Wrong.", FAILURE),
        Verdict::TooLow => ("Too LOW", HINT),
        Verdict::TooHigh => ("Too HIGH", HINT),
    };
    screen.write_str("You typed ", BODY);
    screen.write_decimal(i32::from(guess), BODY);
    screen.write_str(" : ", BODY);
    screen.write_line(message, attr);
}

pub(super) fn reveal<S: Surface>(screen: &mut Screen<S>, target: u8) {
    screen.write_str("Game over. The number was ", BODY);
    screen.write_decimal(i32::from(target), REVEAL);
    screen.line_break();
}

pub(super) fn restart_hint<S: Surface>(screen: &mut Screen<S>) {
    screen.write_line("Press 'r' to play again.", BODY);
}
