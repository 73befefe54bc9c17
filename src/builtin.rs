/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Ready-made decoder vocabularies, layered the way the CSS color module
//! levels are: each level starts from the previous one and adds names,
//! functions and syntax switches. `default_decoder` is the fullest layer,
//! with the natural color shorthand and channel accessors on top of CSS 4.
use crate::color::Color;
use crate::cmyk::Cmyk;
use crate::decoder::{ColorDecoder, ColorDecoderBuilder, FunctionSpec, Param, ParamKind};
use crate::err::ColorError;
use crate::helpers::factor;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::hwb::Hwb;
use crate::lab::{Lab, Lch};
use crate::rgb::Srgb;
use crate::value::Value;
use crate::xyz::Xyz;
use crate::yiq::{Yiq, Yuv};

const CSS1_NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("silver", 0xC0C0C0),
    ("gray", 0x808080),
    ("white", 0xFFFFFF),
    ("maroon", 0x800000),
    ("red", 0xFF0000),
    ("purple", 0x800080),
    ("fuchsia", 0xFF00FF),
    ("green", 0x008000),
    ("lime", 0x00FF00),
    ("olive", 0x808000),
    ("yellow", 0xFFFF00),
    ("navy", 0x000080),
    ("blue", 0x0000FF),
    ("teal", 0x008080),
    ("aqua", 0x00FFFF),
];

const CSS3_NAMED: &[(&str, u32)] = &[
    ("darkblue", 0x00008B),
    ("mediumblue", 0x0000CD),
    ("darkgreen", 0x006400),
    ("darkcyan", 0x008B8B),
    ("deepskyblue", 0x00BFFF),
    ("darkturquoise", 0x00CED1),
    ("mediumspringgreen", 0x00FA9A),
    ("springgreen", 0x00FF7F),
    ("cyan", 0x00FFFF),
    ("midnightblue", 0x191970),
    ("dodgerblue", 0x1E90FF),
    ("lightseagreen", 0x20B2AA),
    ("forestgreen", 0x228B22),
    ("seagreen", 0x2E8B57),
    ("darkslategray", 0x2F4F4F),
    ("darkslategrey", 0x2F4F4F),
    ("limegreen", 0x32CD32),
    ("mediumseagreen", 0x3CB371),
    ("turquoise", 0x40E0D0),
    ("royalblue", 0x4169E1),
    ("steelblue", 0x4682B4),
    ("darkslateblue", 0x483D8B),
    ("mediumturquoise", 0x48D1CC),
    ("indigo", 0x4B0082),
    ("darkolivegreen", 0x556B2F),
    ("cadetblue", 0x5F9EA0),
    ("cornflowerblue", 0x6495ED),
    ("mediumaquamarine", 0x66CDAA),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("slateblue", 0x6A5ACD),
    ("olivedrab", 0x6B8E23),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("mediumslateblue", 0x7B68EE),
    ("lawngreen", 0x7CFC00),
    ("chartreuse", 0x7FFF00),
    ("aquamarine", 0x7FFFD4),
    ("grey", 0x808080),
    ("skyblue", 0x87CEEB),
    ("lightskyblue", 0x87CEFA),
    ("blueviolet", 0x8A2BE2),
    ("darkred", 0x8B0000),
    ("darkmagenta", 0x8B008B),
    ("saddlebrown", 0x8B4513),
    ("darkseagreen", 0x8FBC8F),
    ("lightgreen", 0x90EE90),
    ("mediumpurple", 0x9370DB),
    ("darkviolet", 0x9400D3),
    ("palegreen", 0x98FB98),
    ("darkorchid", 0x9932CC),
    ("yellowgreen", 0x9ACD32),
    ("sienna", 0xA0522D),
    ("brown", 0xA52A2A),
    ("darkgray", 0xA9A9A9),
    ("darkgrey", 0xA9A9A9),
    ("lightblue", 0xADD8E6),
    ("greenyellow", 0xADFF2F),
    ("paleturquoise", 0xAFEEEE),
    ("lightsteelblue", 0xB0C4DE),
    ("powderblue", 0xB0E0E6),
    ("firebrick", 0xB22222),
    ("darkgoldenrod", 0xB8860B),
    ("mediumorchid", 0xBA55D3),
    ("rosybrown", 0xBC8F8F),
    ("darkkhaki", 0xBDB76B),
    ("mediumvioletred", 0xC71585),
    ("indianred", 0xCD5C5C),
    ("peru", 0xCD853F),
    ("chocolate", 0xD2691E),
    ("tan", 0xD2B48C),
    ("lightgray", 0xD3D3D3),
    ("lightgrey", 0xD3D3D3),
    ("thistle", 0xD8BFD8),
    ("orchid", 0xDA70D6),
    ("goldenrod", 0xDAA520),
    ("palevioletred", 0xDB7093),
    ("crimson", 0xDC143C),
    ("gainsboro", 0xDCDCDC),
    ("plum", 0xDDA0DD),
    ("burlywood", 0xDEB887),
    ("lightcyan", 0xE0FFFF),
    ("lavender", 0xE6E6FA),
    ("darksalmon", 0xE9967A),
    ("violet", 0xEE82EE),
    ("palegoldenrod", 0xEEE8AA),
    ("lightcoral", 0xF08080),
    ("khaki", 0xF0E68C),
    ("aliceblue", 0xF0F8FF),
    ("honeydew", 0xF0FFF0),
    ("azure", 0xF0FFFF),
    ("sandybrown", 0xF4A460),
    ("wheat", 0xF5DEB3),
    ("beige", 0xF5F5DC),
    ("whitesmoke", 0xF5F5F5),
    ("mintcream", 0xF5FFFA),
    ("ghostwhite", 0xF8F8FF),
    ("salmon", 0xFA8072),
    ("antiquewhite", 0xFAEBD7),
    ("linen", 0xFAF0E6),
    ("lightgoldenrodyellow", 0xFAFAD2),
    ("oldlace", 0xFDF5E6),
    ("magenta", 0xFF00FF),
    ("deeppink", 0xFF1493),
    ("orangered", 0xFF4500),
    ("tomato", 0xFF6347),
    ("hotpink", 0xFF69B4),
    ("coral", 0xFF7F50),
    ("darkorange", 0xFF8C00),
    ("lightsalmon", 0xFFA07A),
    ("lightpink", 0xFFB6C1),
    ("pink", 0xFFC0CB),
    ("gold", 0xFFD700),
    ("peachpuff", 0xFFDAB9),
    ("navajowhite", 0xFFDEAD),
    ("moccasin", 0xFFE4B5),
    ("bisque", 0xFFE4C4),
    ("mistyrose", 0xFFE4E1),
    ("blanchedalmond", 0xFFEBCD),
    ("papayawhip", 0xFFEFD5),
    ("lavenderblush", 0xFFF0F5),
    ("seashell", 0xFFF5EE),
    ("cornsilk", 0xFFF8DC),
    ("lemonchiffon", 0xFFFACD),
    ("floralwhite", 0xFFFAF0),
    ("snow", 0xFFFAFA),
    ("lightyellow", 0xFFFFE0),
    ("ivory", 0xFFFFF0),
];

fn named(hex: u32) -> Value {
    Value::Color(Color::Srgb(Srgb {
        red: ((hex >> 16) & 0xFF) as f64 / 255.0,
        green: ((hex >> 8) & 0xFF) as f64 / 255.0,
        blue: (hex & 0xFF) as f64 / 255.0,
        alpha: 1.0,
    }))
}

fn rgb_bytes_only() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::optional("red", ParamKind::Int, 0i64),
            Param::optional("green", ParamKind::Int, 0i64),
            Param::optional("blue", ParamKind::Int, 0i64),
        ],
        |args| {
            Ok(Value::Color(Color::Srgb(Srgb::new(
                factor(&args[0], 255.0, true),
                factor(&args[1], 255.0, true),
                factor(&args[2], 255.0, true),
                1.0,
            )?)))
        },
    )
    .with_fallback(named(0xFF0000))
}

fn rgb_with_alpha() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::optional("red", ParamKind::Number, 0i64),
            Param::optional("green", ParamKind::Number, 0i64),
            Param::optional("blue", ParamKind::Number, 0i64),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Srgb(Srgb::new(
                factor(&args[0], 255.0, true),
                factor(&args[1], 255.0, true),
                factor(&args[2], 255.0, true),
                factor(&args[3], 100.0, true),
            )?)))
        },
    )
    .with_fallback(named(0xFF0000))
}

fn hsl_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("hue", ParamKind::Angle),
            Param::required("saturation", ParamKind::Number),
            Param::required("lightness", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Hsl(Hsl::new(
                args[0].expect_angle()?,
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn hwb_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("hue", ParamKind::Angle),
            Param::optional("whiteness", ParamKind::Number, 0.0),
            Param::optional("blackness", ParamKind::Number, 0.0),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Hwb(Hwb::new(
                args[0].expect_angle()?,
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn gray_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("gray", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            let level = factor(&args[0], 255.0, false);
            Ok(Value::Color(Color::Srgb(Srgb::new(
                level,
                level,
                level,
                factor(&args[1], 100.0, false),
            )?)))
        },
    )
}

fn lab_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("light", ParamKind::Number),
            Param::required("a", ParamKind::Number),
            Param::required("b", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Lab(Lab::new(
                factor(&args[0], 100.0, false).max(0.0),
                args[1].expect_number()?,
                args[2].expect_number()?,
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn lch_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("light", ParamKind::Number),
            Param::required("chroma", ParamKind::Number),
            Param::required("hue", ParamKind::Angle),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Lch(Lch::new(
                factor(&args[0], 100.0, false).max(0.0),
                args[1].expect_number()?.max(0.0),
                args[2].expect_angle()?,
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn cmyk_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("cyan", ParamKind::Number),
            Param::optional("magenta", ParamKind::Number, 0.0),
            Param::optional("yellow", ParamKind::Number, 0.0),
            Param::optional("black", ParamKind::Number, 0.0),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Cmyk(Cmyk::new(
                factor(&args[0], 100.0, false),
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
                factor(&args[4], 100.0, false),
            )?)))
        },
    )
}

fn hsv_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("hue", ParamKind::Angle),
            Param::required("saturation", ParamKind::Number),
            Param::required("value", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Hsv(Hsv::new(
                args[0].expect_angle()?,
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn xyz_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("x", ParamKind::Number),
            Param::required("y", ParamKind::Number),
            Param::required("z", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Xyz(Xyz::new(
                factor(&args[0], 100.0, false),
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn yiq_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("y", ParamKind::Number),
            Param::required("i", ParamKind::Number),
            Param::required("q", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Yiq(Yiq::new(
                factor(&args[0], 100.0, false),
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn yuv_spec() -> FunctionSpec {
    FunctionSpec::new(
        vec![
            Param::required("y", ParamKind::Number),
            Param::required("u", ParamKind::Number),
            Param::required("v", ParamKind::Number),
            Param::optional("alpha", ParamKind::Number, 1.0),
        ],
        |args| {
            Ok(Value::Color(Color::Yuv(Yuv::new(
                factor(&args[0], 100.0, false),
                factor(&args[1], 100.0, false),
                factor(&args[2], 100.0, false),
                factor(&args[3], 100.0, false),
            )?)))
        },
    )
}

fn color_param() -> Vec<Param> {
    vec![Param::required("color", ParamKind::Color)]
}

fn adjust_params() -> Vec<Param> {
    vec![
        Param::required("by", ParamKind::Float),
        Param::required("color", ParamKind::Color),
    ]
}

/// Named colors and the byte-only `rgb()` from CSS Level 1, with the
/// Netscape name fallback on.
pub fn css1() -> ColorDecoderBuilder {
    let mut builder = ColorDecoder::builder().netscape_fallback(true);
    for (name, hex) in CSS1_NAMED {
        builder = builder.constant(name, named(*hex));
    }
    builder
        .constant(
            "transparent",
            Value::Color(Color::Srgb(Srgb {
                red: 0.0,
                green: 0.0,
                blue: 0.0,
                alpha: 0.0,
            })),
        )
        .function("rgb", rgb_bytes_only())
}

/// CSS Level 2 adds a single name.
pub fn css2() -> ColorDecoderBuilder {
    css1().constant("orange", named(0xFFA500))
}

/// CSS Color Module Level 3: the full named table, `rgb()` with alpha,
/// `hsl()`, and the `rgba`/`hsla` spellings.
pub fn css3() -> ColorDecoderBuilder {
    let mut builder = css2();
    for (name, hex) in CSS3_NAMED {
        builder = builder.constant(name, named(*hex));
    }
    builder
        .function("rgb", rgb_with_alpha())
        .function("hsl", hsl_spec())
        .alias("rgba", "rgb")
        .alias("hsla", "hsl")
}

/// CSS Color Module Level 4: `hwb()`, `gray()`, `lab()`, `lch()`,
/// `rebeccapurple`, and hex literals with alpha digits.
pub fn css4() -> ColorDecoderBuilder {
    css3()
        .extended_hex(true)
        .constant("rebeccapurple", named(0x663399))
        .function("hwb", hwb_spec())
        .function("gray", gray_spec())
        .function("lab", lab_spec())
        .function("lch", lch_spec())
        .alias("hwba", "hwb")
}

/// Everything: CSS 4 plus the natural color shorthand, channel-order
/// aliases, the remaining color models, channel accessors and the
/// HSL adjustment functions.
pub fn default_builder() -> ColorDecoderBuilder {
    let mut builder = css4()
        .ncol_shorthand(true)
        .function("cmyk", cmyk_spec())
        .function("hsv", hsv_spec())
        .function("xyz", xyz_spec())
        .function("yiq", yiq_spec())
        .function("yuv", yuv_spec())
        .alias("device-cmyk", "cmyk");

    for name in ["rbg", "rbga"] {
        builder = builder.alias_reordered(name, "rgb", &["red", "blue", "green", "alpha"]);
    }
    for name in ["brg", "brga"] {
        builder = builder.alias_reordered(name, "rgb", &["blue", "red", "green", "alpha"]);
    }
    for name in ["bgr", "bgra"] {
        builder = builder.alias_reordered(name, "rgb", &["blue", "green", "red", "alpha"]);
    }
    for name in ["gbr", "gbra"] {
        builder = builder.alias_reordered(name, "rgb", &["green", "blue", "red", "alpha"]);
    }
    for name in ["grb", "grba"] {
        builder = builder.alias_reordered(name, "rgb", &["green", "red", "blue", "alpha"]);
    }
    for name in ["hls", "hlsa"] {
        builder =
            builder.alias_reordered(name, "hsl", &["hue", "lightness", "saturation", "alpha"]);
    }
    for name in ["hbw", "hbwa"] {
        builder =
            builder.alias_reordered(name, "hwb", &["hue", "blackness", "whiteness", "alpha"]);
    }

    builder
        .function(
            "red",
            FunctionSpec::new(color_param(), |args| {
                Ok(Value::Float(args[0].expect_color()?.to_srgb()?.red))
            })
            .with_fallback(named(0xFF0000)),
        )
        .function(
            "green",
            FunctionSpec::new(color_param(), |args| {
                Ok(Value::Float(args[0].expect_color()?.to_srgb()?.green))
            })
            .with_fallback(named(0x00FF00)),
        )
        .function(
            "blue",
            FunctionSpec::new(color_param(), |args| {
                Ok(Value::Float(args[0].expect_color()?.to_srgb()?.blue))
            })
            .with_fallback(named(0x0000FF)),
        )
        .function(
            "darker",
            FunctionSpec::new(adjust_params(), |args| {
                let by = args[0].expect_number()?;
                Ok(Value::Color(args[1].expect_color()?.darker(by)?))
            }),
        )
        .function(
            "lighter",
            FunctionSpec::new(adjust_params(), |args| {
                let by = args[0].expect_number()?;
                Ok(Value::Color(args[1].expect_color()?.lighter(by)?))
            }),
        )
        .function(
            "saturate",
            FunctionSpec::new(adjust_params(), |args| {
                let by = args[0].expect_number()?;
                Ok(Value::Color(args[1].expect_color()?.saturate(by)?))
            }),
        )
        .function(
            "desaturate",
            FunctionSpec::new(adjust_params(), |args| {
                let by = args[0].expect_number()?;
                Ok(Value::Color(args[1].expect_color()?.desaturate(by)?))
            }),
        )
        .function(
            "ncol",
            FunctionSpec::new(vec![Param::required("color", ParamKind::Color)], |args| {
                Ok(Value::Color(args[0].expect_color()?))
            }),
        )
}

/// Builds the full default vocabulary.
pub fn default_decoder() -> Result<ColorDecoder, ColorError> {
    default_builder().build()
}
