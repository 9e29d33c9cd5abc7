//! Feste Farbpalette für Transport-Netzwerke.

/// Netzwerk-Farben (RGBA) in fester Reihenfolge.
pub const NETWORK_PALETTE: [[f32; 4]; 10] = [
    rgb(0xE6, 0x7E, 0x22),
    rgb(0x34, 0x98, 0xDB),
    rgb(0x9B, 0x59, 0xB6),
    rgb(0x1A, 0xBC, 0x9C),
    rgb(0xE7, 0x4C, 0x3C),
    rgb(0x2E, 0xCC, 0x71),
    rgb(0xF3, 0x9C, 0x12),
    rgb(0x34, 0x49, 0x5E),
    rgb(0x16, 0xA0, 0x85),
    rgb(0x8E, 0x44, 0xAD),
];

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Liefert die Farbe für einen Netzwerk-Index (zyklisch über die Palette).
pub fn network_color(index: usize) -> [f32; 4] {
    NETWORK_PALETTE[index % NETWORK_PALETTE.len()]
}
