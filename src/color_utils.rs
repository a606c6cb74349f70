//! Color utility functions shared across the crate.
//!
//! Render values are opaque to the selection logic; these helpers only
//! interpret them where pixels are actually produced.

/// Parse a `#RRGGBB` or `#RGB` token into RGB bytes.
///
/// The leading `#` is optional. Returns None for anything else.
pub fn parse_hex_rgb(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 16 + v;
            }
            Some(rgb)
        }
        _ => None,
    }
}

/// Blend one channel of `src` over `dst` with the given opacity (0.0-1.0).
pub fn blend_channel(dst: u8, src: u8, alpha: f32) -> u8 {
    let alpha = alpha.clamp(0.0, 1.0);
    let value = f32::from(src) * alpha + f32::from(dst) * (1.0 - alpha);
    value.round().clamp(0.0, 255.0) as u8
}
