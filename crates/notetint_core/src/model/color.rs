//! Highlight color resolution.
//!
//! # Responsibility
//! - Resolve stored hex strings (`#abc` / `#aabbcc`) into RGB channels.
//! - Render the CSS `rgba(...)` value written to pane surfaces.
//!
//! # Invariants
//! - Malformed hex input resolves to `None`, never a panic.
//! - 3-digit shorthand expands per nibble (`#abc` == `#aabbcc`).

/// Resolved highlight color: RGB channels plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Rgba {
    /// Resolves a `#rgb` / `#rrggbb` hex string into channels.
    ///
    /// Stored rules are validated at the input boundary, so `None` here
    /// means degraded no-highlight for an out-of-band value.
    pub fn from_hex(hex: &str, alpha: f64) -> Option<Self> {
        let digits = match hex.strip_prefix('#') {
            Some(digits) => digits,
            None => return None,
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return None,
        };

        let packed = u32::from_str_radix(&expanded, 16).ok()?;
        Some(Self {
            red: ((packed >> 16) & 255) as u8,
            green: ((packed >> 8) & 255) as u8,
            blue: (packed & 255) as u8,
            alpha,
        })
    }

    /// Renders the `rgba(r,g,b,a)` form used as the custom-property value.
    ///
    /// The alpha channel renders in its shortest form: `0.04` stays
    /// `0.04`, `1.0` renders as `1`.
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}
