pub mod scancodes;

use crate::{
    interrupts::{pic, KEYBOARD_LINE},
    io::PortIo,
};
use scancodes::ScancodeMap;

// https://wiki.osdev.org/%228042%22_PS/2_Controller
const DATA_PORT: u16 = 0x60;
const STATUS_PORT: u16 = 0x64;
const OUTPUT_BUFFER_FULL: u8 = 1 << 0;
// set 1 break codes are the make code with the top bit set
const RELEASE: u8 = 0x80;

/// What a key press means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Digit(u8),
    Backspace,
    Enter,
    Restart,
    ClearScreen,
    Other,
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        match c {
            '0'..='9' => KeyEvent::Digit(c as u8 - b'0'),
            '\u{8}' => KeyEvent::Backspace,
            '\n' => KeyEvent::Enter,
            'r' | 'R' => KeyEvent::Restart,
            'c' | 'C' => KeyEvent::ClearScreen,
            _ => KeyEvent::Other,
        }
    }
}

/// How one keyboard interrupt ended. Only `Delivered` reached the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    // fired with nothing in the output buffer
    Spurious,
    Released(u8),
    Unmapped(u8),
    Delivered(KeyEvent),
}

/// Runs one keyboard interrupt to completion and hands any key press to
/// `deliver`.
///
/// The controller is acknowledged before anything else. That is safe because
/// the gate keeps IF clear until we return, so the next event can queue up in
/// the controller but cannot interrupt us. Nothing here ever fails: every odd
/// case is a no-op reported through the returned [`Dispatch`].
pub fn dispatch(
    ports: &mut impl PortIo,
    scancodes: &impl ScancodeMap,
    deliver: impl FnOnce(KeyEvent),
) -> Dispatch {
    pic::end_of_interrupt(ports, KEYBOARD_LINE);

    if ports.read(STATUS_PORT) & OUTPUT_BUFFER_FULL == 0 {
        log::trace!("spurious keyboard interrupt");
        return Dispatch::Spurious;
    }

    let code = ports.read(DATA_PORT);
    if code & RELEASE != 0 {
        log::trace!("release {:#04x} ignored", code);
        return Dispatch::Released(code);
    }

    let event = scancodes
        .lookup(code)
        .map_or(KeyEvent::Other, KeyEvent::from);
    if event == KeyEvent::Other {
        log::trace!("scancode {:#04x} has no game meaning", code);
        return Dispatch::Unmapped(code);
    }

    deliver(event);
    Dispatch::Delivered(event)
}

#[cfg(test)]
mod tests {
    use super::{scancodes::Us104Map, *};
    use crate::io::fake::{Access, RecordingPorts};

    fn run(ports: &mut RecordingPorts) -> (Dispatch, Option<KeyEvent>) {
        let mut seen = None;
        let result = dispatch(ports, &Us104Map, |event| seen = Some(event));
        (result, seen)
    }

    #[test]
    fn characters_classify_into_events() {
        assert_eq!(KeyEvent::from('7'), KeyEvent::Digit(7));
        assert_eq!(KeyEvent::from('\u{8}'), KeyEvent::Backspace);
        assert_eq!(KeyEvent::from('\n'), KeyEvent::Enter);
        assert_eq!(KeyEvent::from('R'), KeyEvent::Restart);
        assert_eq!(KeyEvent::from('c'), KeyEvent::ClearScreen);
        assert_eq!(KeyEvent::from('x'), KeyEvent::Other);
        assert_eq!(KeyEvent::from(' '), KeyEvent::Other);
    }

    #[test]
    fn acknowledges_before_touching_the_keyboard() {
        let mut ports = RecordingPorts::new()
            .script(STATUS_PORT, &[0x01])
            .script(DATA_PORT, &[0x05]);
        let (result, seen) = run(&mut ports);

        assert_eq!(result, Dispatch::Delivered(KeyEvent::Digit(4)));
        assert_eq!(seen, Some(KeyEvent::Digit(4)));
        assert_eq!(
            ports.accesses(),
            [
                Access::Write(0x20, 0x20),
                Access::Read(STATUS_PORT),
                Access::Read(DATA_PORT),
            ]
        );
    }

    #[test]
    fn empty_output_buffer_is_spurious() {
        let mut ports = RecordingPorts::new().script(STATUS_PORT, &[0x1C]);
        let (result, seen) = run(&mut ports);

        assert_eq!(result, Dispatch::Spurious);
        assert_eq!(seen, None);
        // the data port is left alone
        assert!(!ports.accesses().contains(&Access::Read(DATA_PORT)));
    }

    #[test]
    fn releases_are_dropped() {
        let mut ports = RecordingPorts::new()
            .script(STATUS_PORT, &[0x01])
            .script(DATA_PORT, &[0x85]);
        assert_eq!(run(&mut ports), (Dispatch::Released(0x85), None));
    }

    #[test]
    fn keys_the_game_does_not_know_are_dropped() {
        // F1 has no character, 'q' has no meaning
        for code in [0x3B, 0x10] {
            let mut ports = RecordingPorts::new()
                .script(STATUS_PORT, &[0x01])
                .script(DATA_PORT, &[code]);
            assert_eq!(run(&mut ports), (Dispatch::Unmapped(code), None));
        }
    }

    #[test]
    fn control_keys_map_to_their_events() {
        let cases = [
            (0x0E, KeyEvent::Backspace),
            (0x1C, KeyEvent::Enter),
            (0x13, KeyEvent::Restart),
            (0x2E, KeyEvent::ClearScreen),
        ];
        for (code, expected) in cases {
            let mut ports = RecordingPorts::new()
                .script(STATUS_PORT, &[0x01])
                .script(DATA_PORT, &[code]);
            assert_eq!(run(&mut ports), (Dispatch::Delivered(expected), Some(expected)));
        }
    }
}
