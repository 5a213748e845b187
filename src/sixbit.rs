//! The two six-bit alphabets used by AIS.
//!
//! The *wire* alphabet armors every 6-bit group of a payload into a printable
//! character of the transport sentence. The *text* alphabet is used inside the
//! payload for names, call signs, destinations and safety text.

/// Maps a 6-bit value (0..=63) to its wire armor character.
pub fn armor_char(value: u8) -> char {
    let value = value & 0x3f;
    if value < 40 {
        (value + 48) as char
    } else {
        (value + 56) as char
    }
}

/// Maps a wire armor character back to its 6-bit value.
pub fn dearmor_char(c: char) -> Option<u8> {
    match c {
        '0'..='W' => Some(c as u8 - 48),
        '`'..='w' => Some(c as u8 - 56),
        _ => None,
    }
}

/// Maps a 6-bit value (0..=63) to its text character. `0` is `@`, the padding
/// character.
pub fn text_char(value: u8) -> char {
    let value = value & 0x3f;
    if value < 32 {
        (value + 64) as char
    } else {
        value as char
    }
}

/// Maps a text character back to its 6-bit value.
pub fn text_value(c: char) -> Option<u8> {
    match c {
        '@'..='_' => Some(c as u8 - 64),
        ' '..='?' => Some(c as u8),
        _ => None,
    }
}

/// Strips the trailing `@` and space padding from a decoded text field.
pub fn trim_text(text: &str) -> &str {
    text.trim_end_matches(['@', ' '])
}
