/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::cmyk::Cmyk;
use crate::err::ColorError;
use crate::helpers::round_half_up;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::hwb::Hwb;
use crate::yiq::Yiq;

/// A color expressed by its channel intensities in the sRGB profile.
///
/// sRGB is the hub representation: every other space converts to it, and
/// most convert from it. All channels and alpha live in 0.0..=1.0 and are
/// rejected at construction when out of range, never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

fn check_channel(value: f64, channel: &'static str) -> Result<f64, ColorError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ColorError::channel(channel, 0.0, 1.0));
    }
    Ok(value)
}

pub(crate) fn check_alpha(alpha: f64) -> Result<f64, ColorError> {
    check_channel(alpha, "alpha")
}

impl Srgb {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Srgb {
            red: check_channel(red, "red")?,
            green: check_channel(green, "green")?,
            blue: check_channel(blue, "blue")?,
            alpha: check_alpha(alpha)?,
        })
    }

    /// Builds an sRGB color from 0..=255 channel bytes.
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: f64) -> Result<Self, ColorError> {
        Ok(Srgb {
            red: red as f64 / 255.0,
            green: green as f64 / 255.0,
            blue: blue as f64 / 255.0,
            alpha: check_alpha(alpha)?,
        })
    }

    /// The channels as bytes, rounded half-up.
    pub fn as_bytes(&self) -> (u8, u8, u8) {
        (
            round_half_up(self.red * 255.0, 0) as u8,
            round_half_up(self.green * 255.0, 0) as u8,
            round_half_up(self.blue * 255.0, 0) as u8,
        )
    }

    /// Decodes a name with the legacy Netscape loose-hex algorithm.
    ///
    /// Any string produces a deterministic color; see
    /// <https://stackoverflow.com/a/8333464> for the history. Non-hex
    /// characters become zeroes (two of them for characters beyond the
    /// UTF-16 basic plane, as the original parsers worked on UTF-16 units),
    /// the input is cut to 128 digits, split into three zones, and two
    /// significant digits are picked out of each zone.
    pub fn from_netscape_color_name(name: &str) -> Srgb {
        let name = name.strip_prefix('#').unwrap_or(name);

        let mut digits: Vec<char> = Vec::new();
        for c in name.to_lowercase().chars().take(128) {
            if c.is_ascii_hexdigit() {
                digits.push(c);
            } else {
                digits.push('0');
                if (c as u32) > 0xFFFF {
                    digits.push('0');
                }
            }
        }
        digits.truncate(128);

        // Zone size, and the offset/length of the digit slice kept per zone.
        let iv = (digits.len() as i64 + 2) / 3;
        let of = if iv > 8 { iv - 8 } else { 0 };
        let sz = iv - of;

        let zones: Vec<Vec<char>> = (0..3)
            .map(|i| {
                let mut zone = slice_like(&digits, i * iv + of, i * iv + iv);
                while (zone.len() as i64) < sz {
                    zone.push('0');
                }
                zone
            })
            .collect();

        // Shared leading zeroes can be skipped, leaving at least two digits.
        let pre = zones
            .iter()
            .map(|zone| zone.iter().take_while(|c| **c == '0').count() as i64)
            .min()
            .unwrap_or(0)
            .min(sz - 2);

        let mut members = zones
            .iter()
            .map(|zone| hex_pair(&slice_like(zone, pre, pre + 2)));
        let r = members.next().unwrap_or(0);
        let g = members.next().unwrap_or(0);
        let b = members.next().unwrap_or(0);

        Srgb {
            red: r as f64 / 255.0,
            green: g as f64 / 255.0,
            blue: b as f64 / 255.0,
            alpha: 1.0,
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = (self.red, self.green, self.blue);

        let min_value = r.min(g).min(b);
        let max_value = r.max(g).max(b);
        let chroma = max_value - min_value;

        let mut hue = if chroma == 0.0 {
            0.0
        } else if r == max_value {
            (g - b) / chroma
        } else if g == max_value {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        hue = hue * 60.0 + if hue < 0.0 { 360.0 } else { 0.0 };

        let lightness = (min_value + max_value) / 2.0;
        let saturation = if min_value == max_value {
            0.0
        } else if lightness < 0.5 {
            chroma / (max_value + min_value)
        } else {
            chroma / (2.0 - max_value - min_value)
        };

        // The 2-decimal rounding is part of the contract: sRGB->HSL->sRGB
        // round trips lose precision on purpose.
        Hsl {
            hue: Angle::Degrees(round_half_up(hue, 2)),
            saturation: round_half_up(saturation, 2),
            lightness: round_half_up(lightness, 2),
            alpha: self.alpha,
        }
    }

    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = (self.red, self.green, self.blue);
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);

        let (turns, saturation);
        if minc == maxc {
            turns = 0.0;
            saturation = 0.0;
        } else {
            saturation = (maxc - minc) / maxc;
            let rc = (maxc - r) / (maxc - minc);
            let gc = (maxc - g) / (maxc - minc);
            let bc = (maxc - b) / (maxc - minc);

            let sector = if r == maxc {
                bc - gc
            } else if g == maxc {
                2.0 + rc - bc
            } else {
                4.0 + gc - rc
            };
            turns = (sector / 6.0).rem_euclid(1.0);
        }

        Hsv {
            hue: Angle::Turns(turns),
            saturation,
            value: maxc,
            alpha: self.alpha,
        }
    }

    pub fn to_hwb(&self) -> Hwb {
        let (r, g, b) = (self.red, self.green, self.blue);

        let max_value = r.max(g).max(b);
        let min_value = r.min(g).min(b);
        let chroma = max_value - min_value;

        let hue = if chroma == 0.0 {
            0.0
        } else if r == max_value {
            (g - b) / chroma
        } else if g == max_value {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Hwb {
            hue: Angle::Turns(hue / 6.0),
            whiteness: min_value,
            blackness: 1.0 - max_value,
            alpha: self.alpha,
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        let (r, g, b) = (self.red, self.green, self.blue);

        let k = 1.0 - r.max(g).max(b);
        let (c, m, y) = if k == 1.0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                (1.0 - r - k) / (1.0 - k),
                (1.0 - g - k) / (1.0 - k),
                (1.0 - b - k) / (1.0 - k),
            )
        };

        Cmyk {
            cyan: c,
            magenta: m,
            yellow: y,
            black: k,
            alpha: self.alpha,
        }
    }

    pub fn to_yiq(&self) -> Yiq {
        let (r, g, b) = (self.red, self.green, self.blue);
        let y = 0.3 * r + 0.59 * g + 0.11 * b;

        Yiq {
            y,
            i: 0.74 * (r - y) - 0.27 * (b - y),
            q: 0.48 * (r - y) + 0.41 * (b - y),
            alpha: self.alpha,
        }
    }
}

/// Slicing over the digit buffer where negative indices count from the end
/// and out-of-range bounds saturate.
fn slice_like(digits: &[char], start: i64, end: i64) -> Vec<char> {
    let len = digits.len() as i64;
    let clamp = |i: i64| -> usize {
        if i < 0 {
            (len + i).max(0) as usize
        } else {
            i.min(len) as usize
        }
    };
    let (a, b) = (clamp(start), clamp(end));
    if a >= b {
        Vec::new()
    } else {
        digits[a..b].to_vec()
    }
}

fn hex_pair(digits: &[char]) -> u8 {
    let mut value: u32 = 0;
    for c in digits.iter().take(2) {
        value = value * 16 + c.to_digit(16).unwrap_or(0);
    }
    value as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_rejects_out_of_range() {
        assert!(Srgb::new(1.2, 0.0, 0.0, 1.0).is_err());
        assert!(Srgb::new(0.0, -0.1, 0.0, 1.0).is_err());
        assert!(Srgb::new(0.0, 0.0, 0.0, 1.5).is_err());
        assert!(Srgb::new(0.0, 0.0, 0.0, f64::NAN).is_err());
        assert!(Srgb::new(1.0, 1.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn bytes_round_half_up() {
        let c = Srgb::new(0.5, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(c.as_bytes(), (128, 0, 255));
    }

    #[test]
    fn netscape_known_values() {
        // "notacolor" folds to hex digits "000ac0000"; the middle zone "ac0"
        // has no leading zeros, so no digits are stripped and green is 0xac.
        let c = Srgb::from_netscape_color_name("notacolor");
        assert_eq!(c.as_bytes(), (0, 0xac, 0));

        // Leading '#' is ignored, and valid hex passes straight through.
        let c = Srgb::from_netscape_color_name("#ff0000");
        assert_eq!(c.as_bytes(), (255, 0, 0));

        // Empty input decodes to black rather than failing.
        let c = Srgb::from_netscape_color_name("");
        assert_eq!(c.as_bytes(), (0, 0, 0));
    }

    #[test]
    fn hsl_round_trip_within_rounding() {
        let original = Srgb::new(0.3, 0.6, 0.9, 1.0).unwrap();
        let back = original.to_hsl().to_srgb();
        assert!((back.red - original.red).abs() < 0.01);
        assert!((back.green - original.green).abs() < 0.01);
        assert!((back.blue - original.blue).abs() < 0.01);
    }

    #[test]
    fn cmyk_pure_black() {
        let black = Cmyk {
            cyan: 0.0,
            magenta: 0.0,
            yellow: 0.0,
            black: 1.0,
            alpha: 1.0,
        };
        let srgb = black.to_srgb();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (0.0, 0.0, 0.0));
    }

    #[test]
    fn gray_has_no_hue() {
        let hsv = Srgb::new(0.25, 0.25, 0.25, 1.0).unwrap().to_hsv();
        assert_eq!(hsv.hue.value(), 0.0);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, 0.25);
    }
}
