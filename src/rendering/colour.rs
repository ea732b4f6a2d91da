//! Mapping from an effective weight to a colour

use std::fmt;

use crate::language::WeightHighlightConfig;

/// Hue in degrees, saturation and lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl Hsl {
    /// Convert to 8-bit sRGB channels, clamping saturation and lightness
    /// into range first.
    pub fn to_srgb(&self) -> (u8, u8, u8) {
        let h = self
            .hue
            .rem_euclid(360.0)
            / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_channel(p, q, h + 1.0 / 3.0);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - 1.0 / 3.0);

        (to_u8(r), to_u8(g), to_u8(b))
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_u8(c: f64) -> u8 {
    (c * 255.0)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// The colour for text at the given weight, or None when it should be left
/// in the default style: at exactly 1, or when the weight isn't finite.
///
/// Intensity grows with the distance from 1, saturating at
/// `max_delta_for_intensity` and shaped by `intensity_exponent`. Weights
/// above 1 take `up_hue`, everything else `down_hue`; the sign only picks
/// the hue, never the intensity.
pub fn colour_for(weight: f64, config: &WeightHighlightConfig) -> Option<Hsl> {
    if !weight.is_finite() || weight == 1.0 {
        return None;
    }

    let delta = (weight - 1.0)
        .abs()
        .min(config.max_delta_for_intensity);
    let normalized = (delta / config.max_delta_for_intensity).min(1.0);
    let intensity = normalized.powf(config.intensity_exponent);

    let hue = if weight > 1.0 {
        config.up_hue
    } else {
        config.down_hue
    };

    Some(Hsl {
        hue,
        saturation: config.saturation + intensity * config.saturation_boost,
        lightness: config.base_lightness - intensity * config.lightness_delta,
    })
}

/// Parse a `#rgb` or `#rrggbb` colour token.
pub fn parse_hex(token: &str) -> Option<(u8, u8, u8)> {
    let digits = token.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }

    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
            let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
            let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
