// -----------------------------------------------------------------------------
// Virtual piano layout: MIDI 36 (C2) .. MIDI 99 (D#7 inclusive)
//
// Rules encoded:
// - one character per semitone, ascending pitch.
// - naturals sit on the plain key, sharps on the shifted key next to it.
// - the classic 61-key layout ends on 'm' (C7); "M,<" extend it to 64 slots.
// -----------------------------------------------------------------------------

pub const KEY_ALPHABET: &str =
    "1!2@34$5%6^78*9(0qQwWeErtTyYuiIoOpPasSdDfgGhHjJklLzZxcCvVbBnmM,<";

pub const ALPHABET_LEN: i32 = 64;

/// MIDI key that lands on the first slot of the alphabet.
pub const LOWEST_KEY: i32 = 36;

/// Octave-wrap a MIDI key into the 64-slot alphabet.
pub fn alphabet_index(key: u8) -> usize {
    let mut index = key as i32 - LOWEST_KEY;

    while index >= ALPHABET_LEN {
        index -= 12;
    }
    while index < 0 {
        index += 12;
    }

    index as usize
}

/// Return the keyboard character a MIDI key is played with.
///
/// Example:
/// ```ignore
/// assert_eq!(key_for_midi(60), 't'); // C4
/// ```
pub fn key_for_midi(key: u8) -> char {
    KEY_ALPHABET.as_bytes()[alphabet_index(key)] as char
}
