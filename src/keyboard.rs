//! Pure helpers for the keyboard half of the host-boundary contract. The
//! actual input driver (reading a terminal, capturing F7/F12) is an
//! external collaborator; this just gives it the translation table so it
//! doesn't have to re-derive it.

/// Translates a raw input byte into the form the keyboard latch expects,
/// short of setting bit 7 (callers that feed the latch directly should
/// follow this with `| 0x80`; `Bus::set_keyboard_latch` expects that bit
/// already set).
pub fn translate_key_byte(byte: u8) -> u8 {
    match byte {
        0x0A => 0x0D,
        0x04 => 0x08,
        0x05 => 0x15,
        0x07 => 0x08,
        0x61..=0x7A => byte & 0xDF,
        other => other,
    }
}

/// Full translation including the "key ready" bit, as delivered to
/// `Bus::set_keyboard_latch`.
pub fn translate_key_byte_for_latch(byte: u8) -> u8 {
    translate_key_byte(byte) | 0x80
}
