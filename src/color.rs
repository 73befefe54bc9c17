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
use crate::lab::{Lab, Lch};
use crate::rgb::Srgb;
use crate::value::Value;
use crate::xyz::Xyz;
use crate::yiq::{Yiq, Yuv};

/// Any color the decoder can produce, tagged by its representation.
///
/// sRGB is the hub: cross-space conversions route through it unless a
/// direct formula exists (HSL↔sRGB, HSV↔sRGB, HWB↔sRGB, Lab↔LCh). Alpha is
/// carried through every conversion unchanged.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Srgb(Srgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Hwb(Hwb),
    Cmyk(Cmyk),
    Lab(Lab),
    Lch(Lch),
    Xyz(Xyz),
    Yiq(Yiq),
    Yuv(Yuv),
}

impl Color {
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Color::Srgb(_) => "sRGB",
            Color::Hsl(_) => "HSL",
            Color::Hsv(_) => "HSV",
            Color::Hwb(_) => "HWB",
            Color::Cmyk(_) => "CMYK",
            Color::Lab(_) => "Lab",
            Color::Lch(_) => "LCh",
            Color::Xyz(_) => "XYZ",
            Color::Yiq(_) => "YIQ",
            Color::Yuv(_) => "YUV",
        }
    }

    pub const fn alpha(&self) -> f64 {
        match self {
            Color::Srgb(c) => c.alpha,
            Color::Hsl(c) => c.alpha,
            Color::Hsv(c) => c.alpha,
            Color::Hwb(c) => c.alpha,
            Color::Cmyk(c) => c.alpha,
            Color::Lab(c) => c.alpha,
            Color::Lch(c) => c.alpha,
            Color::Xyz(c) => c.alpha,
            Color::Yiq(c) => c.alpha,
            Color::Yuv(c) => c.alpha,
        }
    }

    /// Conversion into the hub representation.
    ///
    /// Lab, LCh, XYZ and YUV have no defined path to sRGB and fail with an
    /// unsupported-conversion error.
    pub fn to_srgb(&self) -> Result<Srgb, ColorError> {
        match self {
            Color::Srgb(c) => Ok(*c),
            Color::Hsl(c) => Ok(c.to_srgb()),
            Color::Hsv(c) => Ok(c.to_srgb()),
            Color::Hwb(c) => Ok(c.to_srgb()),
            Color::Cmyk(c) => Ok(c.to_srgb()),
            Color::Yiq(c) => Ok(c.to_srgb()),
            Color::Lab(_) | Color::Lch(_) | Color::Xyz(_) | Color::Yuv(_) => {
                Err(ColorError::unsupported(self.variant_name(), "sRGB"))
            }
        }
    }

    pub fn to_hsl(&self) -> Result<Hsl, ColorError> {
        match self {
            Color::Hsl(c) => Ok(*c),
            _ => Ok(self.to_srgb()?.to_hsl()),
        }
    }

    pub fn to_hsv(&self) -> Result<Hsv, ColorError> {
        match self {
            Color::Hsv(c) => Ok(*c),
            _ => Ok(self.to_srgb()?.to_hsv()),
        }
    }

    pub fn to_hwb(&self) -> Result<Hwb, ColorError> {
        match self {
            Color::Hwb(c) => Ok(*c),
            _ => Ok(self.to_srgb()?.to_hwb()),
        }
    }

    pub fn to_cmyk(&self) -> Result<Cmyk, ColorError> {
        match self {
            Color::Cmyk(c) => Ok(*c),
            _ => Ok(self.to_srgb()?.to_cmyk()),
        }
    }

    pub fn to_yiq(&self) -> Result<Yiq, ColorError> {
        match self {
            Color::Yiq(c) => Ok(*c),
            _ => Ok(self.to_srgb()?.to_yiq()),
        }
    }

    pub fn to_lab(&self) -> Result<Lab, ColorError> {
        match self {
            Color::Lab(c) => Ok(*c),
            Color::Lch(c) => Ok(c.to_lab()),
            _ => Err(ColorError::unsupported(self.variant_name(), "Lab")),
        }
    }

    pub fn to_lch(&self) -> Result<Lch, ColorError> {
        match self {
            Color::Lch(c) => Ok(*c),
            Color::Lab(c) => Ok(c.to_lch()),
            _ => Err(ColorError::unsupported(self.variant_name(), "LCh")),
        }
    }

    pub fn to_xyz(&self) -> Result<Xyz, ColorError> {
        match self {
            Color::Xyz(c) => Ok(*c),
            _ => Err(ColorError::unsupported(self.variant_name(), "XYZ")),
        }
    }

    pub fn to_yuv(&self) -> Result<Yuv, ColorError> {
        match self {
            Color::Yuv(c) => Ok(*c),
            _ => Err(ColorError::unsupported(self.variant_name(), "YUV")),
        }
    }

    /// A darker color. The result is HSL whatever the input representation
    /// was; `darker().lighter()` does not round-trip the variant, and that
    /// is the documented behaviour.
    pub fn darker(&self, by: f64) -> Result<Color, ColorError> {
        let hsl = self.to_hsl()?;
        Ok(Color::Hsl(
            hsl.with_lightness((hsl.lightness - by).max(0.0)),
        ))
    }

    /// A lighter color; see [`Color::darker`] for the representation note.
    pub fn lighter(&self, by: f64) -> Result<Color, ColorError> {
        let hsl = self.to_hsl()?;
        Ok(Color::Hsl(
            hsl.with_lightness((hsl.lightness + by).min(1.0)),
        ))
    }

    pub fn saturate(&self, by: f64) -> Result<Color, ColorError> {
        let hsl = self.to_hsl()?;
        Ok(Color::Hsl(
            hsl.with_saturation((hsl.saturation + by).min(1.0)),
        ))
    }

    pub fn desaturate(&self, by: f64) -> Result<Color, ColorError> {
        let hsl = self.to_hsl()?;
        Ok(Color::Hsl(
            hsl.with_saturation((hsl.saturation - by).max(0.0)),
        ))
    }

    /// Equivalent CSS text forms, most portable first.
    ///
    /// The hex form leads whenever the color converts to sRGB, followed by
    /// `rgba()` when alpha is below 1, then the variant's own functional
    /// form for HSL and HWB. All percentages use half-up rounding.
    pub fn css(&self) -> Vec<String> {
        let mut forms = Vec::new();
        let alpha = round_half_up(self.alpha(), 3);

        if let Ok(rgb) = self.to_srgb() {
            let (r, g, b) = rgb.as_bytes();
            forms.push(format!("#{r:02X}{g:02X}{b:02X}"));
            if alpha < 1.0 {
                forms.push(format!("rgba({r}, {g}, {b}, {}%)", css_percent(alpha)));
            }
        }

        match self {
            Color::Hsl(hsl) => {
                let args = format!(
                    "{}deg, {}%, {}%",
                    css_degrees(&hsl.hue),
                    css_percent(hsl.saturation),
                    css_percent(hsl.lightness),
                );
                if alpha < 1.0 {
                    forms.push(format!("hsla({args}, {}%)", css_percent(alpha)));
                } else {
                    forms.push(format!("hsl({args})"));
                }
            }
            Color::Hwb(hwb) => {
                let args = format!(
                    "{}deg, {}%, {}%",
                    css_degrees(&hwb.hue),
                    css_percent(hwb.whiteness),
                    css_percent(hwb.blackness),
                );
                if alpha < 1.0 {
                    forms.push(format!("hwba({args}, {}%)", css_percent(alpha)));
                } else {
                    forms.push(format!("hwb({args})"));
                }
            }
            _ => {}
        }

        forms
    }

    /// Decodes an expression that must produce exactly one color, with the
    /// default decoder and the prefer-colors policy applied.
    pub fn from_text(expr: &str) -> Result<Color, ColorError> {
        let decoder = crate::builtin::default_decoder()?;
        let results = decoder.decode(expr, true, false)?;
        match results.as_slice() {
            [Value::Color(color)] => Ok(*color),
            _ => Err(ColorError::expression(
                format!("expression did not produce a single color: '{expr}'"),
                None,
            )),
        }
    }
}

impl PartialEq for Color {
    /// Compares through the sRGB hub, rounded to 3 decimals per channel.
    /// Colors that cannot reach the hub never compare equal.
    fn eq(&self, other: &Self) -> bool {
        let (Ok(a), Ok(b)) = (self.to_srgb(), other.to_srgb()) else {
            return false;
        };
        let rounded =
            |c: Srgb| -> [f64; 4] { [c.red, c.green, c.blue, c.alpha].map(|v| round_half_up(v, 3)) };
        rounded(a) == rounded(b)
    }
}

fn css_percent(value: f64) -> String {
    let percent = round_half_up(value, 4) * 100.0;
    if percent == percent.trunc() {
        format!("{}", percent as i64)
    } else {
        format!("{percent}")
    }
}

fn css_degrees(angle: &Angle) -> i64 {
    angle.to_degrees().value() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> Color {
        Color::Srgb(Srgb::new(0.5, 0.5, 0.5, 1.0).unwrap())
    }

    #[test]
    fn darker_result_is_hsl() {
        let darker = gray().darker(0.1).unwrap().darker(0.1).unwrap();
        assert!(matches!(darker, Color::Hsl(_)));
        let hsl = darker.to_hsl().unwrap();
        assert!((hsl.lightness - 0.3).abs() < 1e-9);

        // Going back up does not restore the original variant either.
        let lighter = darker.lighter(0.2).unwrap();
        assert!(matches!(lighter, Color::Hsl(_)));
    }

    #[test]
    fn lightness_clamps_at_bounds() {
        let black = gray().darker(0.9).unwrap().to_hsl().unwrap();
        assert_eq!(black.lightness, 0.0);
        let white = gray().lighter(0.9).unwrap().to_hsl().unwrap();
        assert_eq!(white.lightness, 1.0);
    }

    #[test]
    fn unsupported_hub_conversions() {
        let lab = Color::Lab(Lab::new(50.0, 10.0, 10.0, 1.0).unwrap());
        assert_eq!(
            lab.to_srgb(),
            Err(ColorError::unsupported("Lab", "sRGB"))
        );
        let yuv = Color::Yuv(Yuv::new(0.5, 0.1, 0.1, 1.0).unwrap());
        assert!(yuv.to_srgb().is_err());
        assert!(yuv.darker(0.1).is_err());
    }

    #[test]
    fn lab_lch_round_trip_exact() {
        let lab = Color::Lab(Lab::new(52.0, -33.0, 18.0, 1.0).unwrap());
        let back = Color::Lch(lab.to_lch().unwrap()).to_lab().unwrap();
        assert!((back.lightness - 52.0).abs() < 1e-9);
        assert!((back.a + 33.0).abs() < 1e-9);
        assert!((back.b - 18.0).abs() < 1e-9);
    }

    #[test]
    fn css_forms_for_srgb_with_alpha() {
        let c = Color::Srgb(Srgb::from_bytes(18, 52, 86, 0.82).unwrap());
        assert_eq!(
            c.css(),
            vec!["#123456".to_string(), "rgba(18, 52, 86, 82%)".to_string()]
        );
    }

    #[test]
    fn css_forms_for_hsl() {
        let c = Color::Hsl(Hsl::new(Angle::Degrees(270.0), 0.5, 0.25, 1.0).unwrap());
        let forms = c.css();
        assert_eq!(forms.last().unwrap(), "hsl(270deg, 50%, 25%)");
        assert!(forms[0].starts_with('#'));
    }

    #[test]
    fn from_text_needs_exactly_one_color() {
        let color = Color::from_text("darker(0.1, #808080)").unwrap();
        assert!(matches!(color, Color::Hsl(_)));

        // The prefer-colors policy turns stray words into Netscape colors.
        let color = Color::from_text("notacolor").unwrap();
        assert_eq!(color.to_srgb().unwrap().as_bytes(), (0, 0xac, 0));

        assert!(Color::from_text("1, 2").is_err());
    }

    #[test]
    fn equality_routes_through_hub() {
        let hsl = Color::Hsl(Hsl::new(Angle::Degrees(0.0), 0.0, 0.5, 1.0).unwrap());
        assert_eq!(gray(), hsl);

        let lab = Color::Lab(Lab::new(50.0, 0.0, 0.0, 1.0).unwrap());
        assert_ne!(lab, lab);
    }
}
