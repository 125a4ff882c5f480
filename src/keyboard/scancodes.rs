use pc_keyboard::{layouts::Us104Key, DecodedKey, HandleControl, Keyboard, ScancodeSet1};

/// Raw make code to character. Codes with no character come back as `None`.
pub trait ScancodeMap {
    fn lookup(&self, code: u8) -> Option<char>;
}

// Scan code set 1 on a US 104 key board, read the way a plain lookup table
// would: nothing is ever held down, so letters are lowercase and the number
// row gives digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct Us104Map;

impl ScancodeMap for Us104Map {
    fn lookup(&self, code: u8) -> Option<char> {
        // fresh decoder per byte, no modifier state survives between keys
        let mut keyboard = Keyboard::new(ScancodeSet1::new(), Us104Key, HandleControl::Ignore);
        let event = keyboard.add_byte(code).ok().flatten()?;
        match keyboard.process_keyevent(event)? {
            DecodedKey::Unicode(c) => Some(c),
            DecodedKey::RawKey(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_row_gives_digits() {
        let map = Us104Map;
        assert_eq!(map.lookup(0x02), Some('1'));
        assert_eq!(map.lookup(0x05), Some('4'));
        assert_eq!(map.lookup(0x0A), Some('9'));
        assert_eq!(map.lookup(0x0B), Some('0'));
    }

    #[test]
    fn control_keys() {
        let map = Us104Map;
        assert_eq!(map.lookup(0x0E), Some('\u{8}'));
        assert_eq!(map.lookup(0x1C), Some('\n'));
        assert_eq!(map.lookup(0x13), Some('r'));
        assert_eq!(map.lookup(0x2E), Some('c'));
    }

    #[test]
    fn keys_without_a_character_are_unmapped() {
        let map = Us104Map;
        // F1
        assert_eq!(map.lookup(0x3B), None);
        // extended prefix on its own
        assert_eq!(map.lookup(0xE0), None);
    }
}
