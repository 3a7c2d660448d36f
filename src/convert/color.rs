//! Color tables for SGR color parameters

/// 4-bit palette: indices 0-7 are the normal colors, 8-15 the bright ones.
const PALETTE: [&str; 16] = [
    "#000", "#A00", "#0A0", "#A50", "#00A", "#A0A", "#0AA", "#AAA",
    "#555", "#F55", "#5F5", "#FF5", "#55F", "#F5F", "#5FF", "#FFF",
];

/// Hex color for a 4-bit palette index.
pub fn four_bit(index: u8) -> &'static str {
    PALETTE[index as usize & 0xF]
}

/// Hex color for an 8-bit (256-color) index: palette, 6x6x6 cube, grayscale.
pub fn fixed(index: u8) -> String {
    match index {
        0..=15 => PALETTE[index as usize].to_string(),
        16..=231 => {
            let n = index - 16;
            rgb(cube_level(n / 36), cube_level(n / 6 % 6), cube_level(n % 6))
        }
        232..=255 => {
            let v = 8 + 10 * (index - 232);
            rgb(v, v, v)
        }
    }
}

fn cube_level(v: u8) -> u8 {
    if v == 0 {
        0
    } else {
        55 + 40 * v
    }
}

/// Hex color for a truecolor triple.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}
