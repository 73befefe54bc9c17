/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use std::collections::HashMap;

use crate::angle::Angle;
use crate::color::Color;
use crate::err::ColorError;
use crate::expr::{Callee, Expr, parse};
use crate::helpers::factor;
use crate::hwb::Hwb;
use crate::rgb::Srgb;
use crate::token::{TokenKind, tokenize};
use crate::value::Value;

/// Registry keys are case-folded with `-` mapped to `_`, so `Device-CMYK`
/// and `device_cmyk` address the same entry.
pub(crate) fn canonical_key(name: &str) -> String {
    name.replace('-', "_").to_lowercase()
}

/// The kind of value a function parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Any integer or float.
    Number,
    Int,
    Float,
    Angle,
    Color,
}

impl ParamKind {
    fn describe(self) -> &'static str {
        match self {
            ParamKind::Number => "number",
            ParamKind::Int => "integer",
            ParamKind::Float => "float",
            ParamKind::Angle => "angle",
            ParamKind::Color => "color",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            ParamKind::Number => value.is_number(),
            ParamKind::Int => matches!(value, Value::Integer(_)),
            ParamKind::Float => matches!(value, Value::Float(_)),
            ParamKind::Angle => matches!(value, Value::Angle(_)),
            ParamKind::Color => matches!(value, Value::Color(_)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Param {
    name: &'static str,
    kind: ParamKind,
    default: Option<Value>,
}

impl Param {
    pub fn required(name: &'static str, kind: ParamKind) -> Self {
        Param {
            name,
            kind,
            default: None,
        }
    }

    pub fn optional(name: &'static str, kind: ParamKind, default: impl Into<Value>) -> Self {
        Param {
            name,
            kind,
            default: Some(default.into()),
        }
    }
}

pub type RunFn = fn(&[Value]) -> Result<Value, ColorError>;

/// A function declared for registration: its parameter signature, the code
/// to run, and an optional value the bare name stands for when referenced
/// without call syntax (the way `rgb` alone reads as red).
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    params: Vec<Param>,
    fallback: Option<Value>,
    run: RunFn,
}

impl FunctionSpec {
    pub fn new(params: Vec<Param>, run: RunFn) -> Self {
        FunctionSpec {
            params,
            fallback: None,
            run,
        }
    }

    pub fn with_fallback(mut self, value: impl Into<Value>) -> Self {
        self.fallback = Some(value.into());
        self
    }
}

/// Where each underlying argument comes from in a resolved function: a
/// caller-facing parameter slot, or a value baked in by an alias that
/// dropped the parameter.
#[derive(Debug, Clone)]
enum Slot {
    Arg(usize),
    Default(Value),
}

fn identity_slots(count: usize) -> Vec<Slot> {
    (0..count).map(Slot::Arg).collect()
}

#[derive(Debug, Clone)]
struct Function {
    params: Vec<Param>,
    slots: Vec<Slot>,
    fallback: Option<Value>,
    run: RunFn,
}

impl From<FunctionSpec> for Function {
    fn from(spec: FunctionSpec) -> Self {
        let slots = identity_slots(spec.params.len());
        Function {
            params: spec.params,
            slots,
            fallback: spec.fallback,
            run: spec.run,
        }
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Constant(Value),
    Function(Function),
}

#[derive(Debug, Clone)]
enum Draft {
    Constant(Value),
    Function(FunctionSpec),
    Alias { target: String, args: Vec<String> },
}

/// Accumulates names, functions and aliases, then resolves them into an
/// immutable [`ColorDecoder`]. Layered vocabularies are built by chaining:
/// later registrations override earlier ones under the same canonical key.
#[derive(Debug, Clone)]
pub struct ColorDecoderBuilder {
    entries: HashMap<String, Draft>,
    ncol_shorthand: bool,
    extended_hex: bool,
    netscape_fallback: bool,
    max_nesting_depth: usize,
}

impl Default for ColorDecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorDecoderBuilder {
    pub fn new() -> Self {
        ColorDecoderBuilder {
            entries: HashMap::new(),
            ncol_shorthand: false,
            extended_hex: false,
            netscape_fallback: false,
            max_nesting_depth: 64,
        }
    }

    pub fn constant(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.entries
            .insert(canonical_key(name), Draft::Constant(value.into()));
        self
    }

    pub fn function(mut self, name: &str, spec: FunctionSpec) -> Self {
        self.entries
            .insert(canonical_key(name), Draft::Function(spec));
        self
    }

    /// Registers another name for `target`, keeping its signature.
    pub fn alias(self, name: &str, target: &str) -> Self {
        self.alias_reordered(name, target, &[])
    }

    /// Registers an alias exposing only the named parameters of `target`, in
    /// the given order. Parameters left out must have defaults; those are
    /// baked into the alias.
    pub fn alias_reordered(mut self, name: &str, target: &str, args: &[&str]) -> Self {
        self.entries.insert(
            canonical_key(name),
            Draft::Alias {
                target: canonical_key(target),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
        );
        self
    }

    /// Enables the `R30`-style natural color shorthand.
    pub fn ncol_shorthand(mut self, enabled: bool) -> Self {
        self.ncol_shorthand = enabled;
        self
    }

    /// Allows 4- and 8-digit hex literals carrying alpha.
    pub fn extended_hex(mut self, enabled: bool) -> Self {
        self.extended_hex = enabled;
        self
    }

    /// Makes unknown names decode as loose Netscape hex colors instead of
    /// failing.
    pub fn netscape_fallback(mut self, enabled: bool) -> Self {
        self.netscape_fallback = enabled;
        self
    }

    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Resolves aliases and checks declared signatures. Unresolvable or
    /// cyclic aliases and malformed defaults are reported here, not at
    /// decode time.
    pub fn build(self) -> Result<ColorDecoder, ColorError> {
        let mut resolved: HashMap<String, Entry> = HashMap::new();
        let mut pending: HashMap<String, (String, Vec<String>)> = HashMap::new();

        for (key, draft) in self.entries {
            match draft {
                Draft::Constant(value) => {
                    resolved.insert(key, Entry::Constant(value));
                }
                Draft::Function(spec) => {
                    check_spec(&key, &spec)?;
                    resolved.insert(key, Entry::Function(spec.into()));
                }
                Draft::Alias { target, args } => {
                    pending.insert(key, (target, args));
                }
            }
        }

        // Aliases may point at other aliases, so resolve by fixed point:
        // each round handles every alias that no longer depends on an
        // unresolved one. A round with no progress means a cycle.
        while !pending.is_empty() {
            let ready: Vec<String> = pending
                .iter()
                .filter(|(_, (target, _))| !pending.contains_key(target))
                .map(|(key, _)| key.clone())
                .collect();
            if ready.is_empty() {
                let mut names: Vec<&str> = pending.keys().map(String::as_str).collect();
                names.sort_unstable();
                return Err(ColorError::expression(
                    format!(
                        "could not resolve aliases, there might be a cyclic \
                         dependency between: {}",
                        names.join(", ")
                    ),
                    None,
                ));
            }
            for key in ready {
                let (target, args) = pending.remove(&key).unwrap_or_default();
                let function = match resolved.get(&target) {
                    Some(Entry::Function(function)) => function,
                    Some(Entry::Constant(_)) => {
                        return Err(ColorError::expression(
                            format!("alias '{key}' references non-function '{target}'"),
                            None,
                        ));
                    }
                    None => {
                        return Err(ColorError::expression(
                            format!("alias '{key}' references undefined function '{target}'"),
                            None,
                        ));
                    }
                };
                let rearranged = rearrange(&key, function, &args)?;
                resolved.insert(key, Entry::Function(rearranged));
            }
        }

        Ok(ColorDecoder {
            mapping: resolved,
            ncol_function: ncol_function(),
            ncol_shorthand: self.ncol_shorthand,
            extended_hex: self.extended_hex,
            netscape_fallback: self.netscape_fallback,
            max_nesting_depth: self.max_nesting_depth,
        })
    }
}

fn check_spec(name: &str, spec: &FunctionSpec) -> Result<(), ColorError> {
    for param in &spec.params {
        let Some(default) = &param.default else {
            continue;
        };
        let compatible = param.kind.matches(default)
            || matches!((param.kind, default), (ParamKind::Float, Value::Integer(_)))
            || matches!(
                (param.kind, default),
                (ParamKind::Int, Value::Float(f)) if f.fract() == 0.0
            )
            || (param.kind == ParamKind::Angle && default.is_number());
        if !compatible {
            return Err(ColorError::expression(
                format!(
                    "function '{name}', parameter '{}': default value is not a \
                     valid {}",
                    param.name,
                    param.kind.describe()
                ),
                None,
            ));
        }
    }
    Ok(())
}

/// Builds the alias's view of `target`: proxy parameters in the alias's
/// order, and one slot per underlying parameter pointing either back at a
/// proxy position or at a baked default.
fn rearrange(alias: &str, target: &Function, args: &[String]) -> Result<Function, ColorError> {
    if args.is_empty() {
        return Ok(Function {
            params: target.params.clone(),
            slots: target.slots.clone(),
            fallback: None,
            run: target.run,
        });
    }

    let mut mapped: Vec<Option<usize>> = vec![None; target.params.len()];
    let mut params = Vec::with_capacity(args.len());
    for (proxy_index, arg) in args.iter().enumerate() {
        let index = target
            .params
            .iter()
            .position(|p| p.name == arg)
            .ok_or_else(|| {
                ColorError::expression(
                    format!("'{arg}' is not a parameter of the function aliased by '{alias}'"),
                    None,
                )
            })?;
        if mapped[index].is_some() {
            return Err(ColorError::expression(
                format!("parameter '{arg}' is repeated in alias '{alias}'"),
                None,
            ));
        }
        mapped[index] = Some(proxy_index);
        params.push(target.params[index].clone());
    }

    // A default cannot be honored in front of a still-required parameter.
    let mandatory_until = params
        .iter()
        .rposition(|p| p.default.is_none())
        .map_or(-1, |i| i as isize);
    for (index, param) in params.iter_mut().enumerate() {
        if (index as isize) <= mandatory_until {
            param.default = None;
        }
    }

    let mut slots = Vec::with_capacity(target.slots.len());
    for (slot, param) in target.slots.iter().zip(target.params.iter()) {
        match slot {
            Slot::Default(value) => slots.push(Slot::Default(value.clone())),
            Slot::Arg(i) => match mapped[*i] {
                Some(proxy_index) => slots.push(Slot::Arg(proxy_index)),
                None => match &target.params[*i].default {
                    Some(value) => slots.push(Slot::Default(value.clone())),
                    None => {
                        return Err(ColorError::expression(
                            format!(
                                "'{}' is left without a value in alias '{alias}'",
                                param.name
                            ),
                            None,
                        ));
                    }
                },
            },
        }
    }

    Ok(Function {
        params,
        slots,
        fallback: None,
        run: target.run,
    })
}

/// The function behind the natural color shorthand: hue plus optional
/// whiteness and blackness, producing an HWB color.
fn ncol_function() -> Function {
    let params = vec![
        Param::required("hue", ParamKind::Angle),
        Param::optional("whiteness", ParamKind::Number, 0i64),
        Param::optional("blackness", ParamKind::Number, 0i64),
    ];
    Function {
        slots: identity_slots(params.len()),
        params,
        fallback: None,
        run: |args| {
            let hue = args[0].expect_angle()?;
            let whiteness = factor(&args[1], 100.0, false);
            let blackness = factor(&args[2], 100.0, false);
            Ok(Value::Color(Color::Hwb(Hwb::new(
                hue, whiteness, blackness, 1.0,
            )?)))
        },
    }
}

/// An immutable expression decoder: a resolved name registry plus the
/// syntax switches fixed at build time. One decoder may serve any number of
/// `decode` calls; nothing is mutated while decoding.
#[derive(Debug, Clone)]
pub struct ColorDecoder {
    mapping: HashMap<String, Entry>,
    ncol_function: Function,
    ncol_shorthand: bool,
    extended_hex: bool,
    netscape_fallback: bool,
    max_nesting_depth: usize,
}

impl ColorDecoder {
    pub fn builder() -> ColorDecoderBuilder {
        ColorDecoderBuilder::new()
    }

    /// Whether the registry has an entry under this name, canonicalized.
    pub fn contains(&self, name: &str) -> bool {
        self.mapping.contains_key(&canonical_key(name))
    }

    fn lookup(&self, name: &str) -> Option<&Entry> {
        self.mapping.get(&canonical_key(name))
    }

    fn netscape(text: &str) -> Value {
        Value::Color(Color::Srgb(Srgb::from_netscape_color_name(text)))
    }

    /// Decodes a full expression into its top-level values.
    ///
    /// With `prefer_colors`, a top-level result that is a bare number but
    /// still carries its source text is reinterpreted as a loose Netscape
    /// color when the fallback switch is on. With `prefer_angles`, bare
    /// numbers are wrapped as degrees instead. Both are conversion policies
    /// of the caller, not of the expression.
    pub fn decode(
        &self,
        expr: &str,
        prefer_colors: bool,
        prefer_angles: bool,
    ) -> Result<Vec<Value>, ColorError> {
        let tokens = tokenize(expr, self.extended_hex)?;
        let roots = parse(
            tokens,
            self.ncol_shorthand,
            self.max_nesting_depth,
            expr.chars().count(),
        )?;

        let mut results = Vec::with_capacity(roots.len());
        for root in &roots {
            let (value, fallback_text) = self.evaluate(root, None)?;
            let value = match (value, fallback_text) {
                (value, Some(text))
                    if prefer_colors
                        && self.netscape_fallback
                        && value.as_ref().is_none_or(Value::is_number) =>
                {
                    Some(Self::netscape(&text))
                }
                // An empty top-level argument decodes to nothing.
                (None, _) => None,
                (Some(value), _) if prefer_angles && value.is_number() => Some(Value::Angle(
                    Angle::Degrees(value.as_number().unwrap_or(0.0)),
                )),
                (value, _) => value,
            };
            results.extend(value);
        }
        Ok(results)
    }

    /// Evaluates one node, returning the value together with the source
    /// text a Netscape fallback could reinterpret. Empty arguments produce
    /// no value but keep their (empty) text.
    fn evaluate(
        &self,
        element: &Expr,
        parent: Option<&str>,
    ) -> Result<(Option<Value>, Option<String>), ColorError> {
        let (callee, supplied_args, column) = match element {
            Expr::Literal(token) => {
                return match &token.kind {
                    TokenKind::Name(name) => self.evaluate_name(name, token.column, parent),
                    TokenKind::Angle(angle) | TokenKind::Ncol(angle) => {
                        Ok((Some(Value::Angle(*angle)), Some(token.rawtext.clone())))
                    }
                    TokenKind::Percentage(value) | TokenKind::Float(value) => {
                        Ok((Some(Value::Float(*value)), Some(token.rawtext.clone())))
                    }
                    TokenKind::Integer(value) => {
                        Ok((Some(Value::Integer(*value)), Some(token.rawtext.clone())))
                    }
                    TokenKind::Hex(color) => Ok((
                        Some(Value::Color(Color::Srgb(*color))),
                        Some(token.rawtext.clone()),
                    )),
                    TokenKind::Empty => Ok((None, Some(String::new()))),
                    TokenKind::CallStart | TokenKind::CallEnd => {
                        unreachable!("call delimiters never appear as literals")
                    }
                };
            }
            Expr::Call {
                callee,
                args,
                column,
            } => (callee, args.as_slice(), *column),
        };

        let (function, function_name): (&Function, &str) = match callee {
            Callee::ImplicitNcol => (&self.ncol_function, "<implicit ncol function>"),
            Callee::Named(name) => match self.lookup(name) {
                Some(Entry::Function(function)) => (function, name.as_str()),
                Some(Entry::Constant(_)) => {
                    return Err(ColorError::in_function(
                        format!("'{name}' is not a function"),
                        Some(column),
                        parent,
                    ));
                }
                None => {
                    return Err(ColorError::in_function(
                        format!("function '{name}' not found"),
                        Some(column),
                        parent,
                    ));
                }
            },
        };

        // Trailing empty arguments do not count, so `f(a, b, , ,)` still
        // supplies two.
        let mut supplied = supplied_args;
        while let Some(Expr::Literal(token)) = supplied.last() {
            if token.kind != TokenKind::Empty {
                break;
            }
            supplied = &supplied[..supplied.len() - 1];
        }

        if supplied.len() > function.params.len() {
            return Err(ColorError::in_function(
                format!(
                    "too many arguments for '{function_name}': expected {}, got {}",
                    function.params.len(),
                    supplied.len()
                ),
                Some(column),
                parent,
            ));
        }

        let mut proxy_args = Vec::with_capacity(function.params.len());
        for (index, param) in function.params.iter().enumerate() {
            let (arg, fallback_text, arg_column) = match supplied.get(index) {
                Some(node) => {
                    let (value, text) = self.evaluate(node, None)?;
                    (value, text, node.column())
                }
                None => (None, None, column),
            };
            let arg = arg.or_else(|| param.default.clone());
            let Some(arg) = arg else {
                return Err(ColorError::in_function(
                    format!("expected a value for '{}'", param.name),
                    Some(arg_column),
                    Some(function_name),
                ));
            };
            proxy_args.push(self.coerce(
                arg,
                fallback_text.as_deref(),
                param,
                arg_column,
                function_name,
            )?);
        }

        let final_args: Vec<Value> = function
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Arg(index) => proxy_args[*index].clone(),
                Slot::Default(value) => value.clone(),
            })
            .collect();

        let result = (function.run)(&final_args)?;
        Ok((Some(result), None))
    }

    fn evaluate_name(
        &self,
        name: &str,
        column: usize,
        parent: Option<&str>,
    ) -> Result<(Option<Value>, Option<String>), ColorError> {
        match self.lookup(name) {
            Some(Entry::Constant(value)) => Ok((Some(value.clone()), Some(name.to_string()))),
            Some(Entry::Function(function)) => match &function.fallback {
                Some(value) => Ok((Some(value.clone()), Some(name.to_string()))),
                None => Err(ColorError::in_function(
                    format!("'{name}' is not a value and has no fallback value"),
                    Some(column),
                    parent,
                )),
            },
            None if self.netscape_fallback => {
                Ok((Some(Self::netscape(name)), Some(name.to_string())))
            }
            None => Err(ColorError::in_function(
                format!("unknown value '{name}'"),
                Some(column),
                parent,
            )),
        }
    }

    /// Argument type admission, tried in order: exact kind match, Netscape
    /// reinterpretation of the source text for color parameters, bare
    /// numbers as degrees for angle parameters, integer widening, and
    /// narrowing of integral floats.
    fn coerce(
        &self,
        arg: Value,
        fallback_text: Option<&str>,
        param: &Param,
        column: usize,
        function_name: &str,
    ) -> Result<Value, ColorError> {
        if param.kind.matches(&arg) {
            return Ok(arg);
        }
        if param.kind == ParamKind::Color && self.netscape_fallback {
            if let Some(text) = fallback_text {
                return Ok(Self::netscape(text));
            }
        }
        if param.kind == ParamKind::Angle {
            if let Some(number) = arg.as_number() {
                return Ok(Value::Angle(Angle::Degrees(number)));
            }
        }
        if param.kind == ParamKind::Float {
            if let Value::Integer(value) = arg {
                return Ok(Value::Float(value as f64));
            }
        }
        if param.kind == ParamKind::Int {
            if let Value::Float(value) = arg {
                if value.fract() == 0.0 {
                    return Ok(Value::Integer(value as i64));
                }
            }
        }
        Err(ColorError::in_function(
            format!(
                "a {} did not match the expected {} for parameter '{}'",
                arg.kind_name(),
                param.kind.describe(),
                param.name
            ),
            Some(column),
            Some(function_name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_spec() -> FunctionSpec {
        FunctionSpec::new(
            vec![
                Param::required("level", ParamKind::Number),
                Param::optional("alpha", ParamKind::Number, 1.0),
            ],
            |args| {
                let level = factor(&args[0], 255.0, true);
                let alpha = factor(&args[1], 100.0, true);
                Ok(Value::Color(Color::Srgb(Srgb::new(
                    level, level, level, alpha,
                )?)))
            },
        )
    }

    fn swap_spec() -> FunctionSpec {
        // Two distinguishable channels, to observe argument order.
        FunctionSpec::new(
            vec![
                Param::required("red", ParamKind::Number),
                Param::required("green", ParamKind::Number),
                Param::optional("alpha", ParamKind::Number, 1.0),
            ],
            |args| {
                Ok(Value::Color(Color::Srgb(Srgb::new(
                    factor(&args[0], 255.0, true),
                    factor(&args[1], 255.0, true),
                    0.0,
                    factor(&args[2], 100.0, true),
                )?)))
            },
        )
    }

    fn decoder() -> ColorDecoder {
        ColorDecoder::builder()
            .constant("dark", Value::Color(Color::Srgb(black())))
            .function("gray", gray_spec())
            .function("rg", swap_spec())
            .alias("graya", "gray")
            .alias_reordered("gr", "rg", &["green", "red", "alpha"])
            .build()
            .unwrap()
    }

    fn black() -> Srgb {
        Srgb::new(0.0, 0.0, 0.0, 1.0).unwrap()
    }

    fn one_color(decoder: &ColorDecoder, expr: &str) -> Color {
        let results = decoder.decode(expr, false, false).unwrap();
        match results.as_slice() {
            [Value::Color(color)] => *color,
            other => panic!("expected one color for '{expr}', got {other:?}"),
        }
    }

    #[test]
    fn keys_are_canonicalized() {
        let d = decoder();
        assert!(d.contains("GRAY"));
        assert!(!d.contains("gr-aya"));
        assert_eq!(one_color(&d, "DARK"), Color::Srgb(black()));
    }

    #[test]
    fn defaults_fill_missing_arguments() {
        let d = decoder();
        let color = one_color(&d, "gray(128)").to_srgb().unwrap();
        assert_eq!(color.alpha, 1.0);
        assert!((color.red - 128.0 / 255.0).abs() < 1e-12);

        // An interior empty argument also takes the default.
        let color = one_color(&d, "gray(128,)").to_srgb().unwrap();
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn missing_required_argument() {
        let err = decoder().decode("gray()", false, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a value for 'level' at column 0 in function 'gray'"
        );
    }

    #[test]
    fn too_many_arguments() {
        let err = decoder().decode("gray(1, 2, 3)", false, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "too many arguments for 'gray': expected 2, got 3 at column 0"
        );
    }

    #[test]
    fn unknown_name_without_fallback() {
        let err = decoder().decode("nosuch", false, false).unwrap_err();
        assert_eq!(err.to_string(), "unknown value 'nosuch' at column 0");
    }

    #[test]
    fn unknown_name_with_netscape_fallback() {
        let d = ColorDecoder::builder()
            .netscape_fallback(true)
            .build()
            .unwrap();
        let color = one_color(&d, "notacolor").to_srgb().unwrap();
        let (r, g, b) = color.as_bytes();
        assert_eq!((r, g, b), (0x00, 0xAC, 0x00));
    }

    #[test]
    fn plain_alias_is_equivalent() {
        let d = decoder();
        assert_eq!(one_color(&d, "graya(10, 50%)"), one_color(&d, "gray(10, 50%)"));
    }

    #[test]
    fn reordered_alias_matches_native_order() {
        let d = decoder();
        assert_eq!(one_color(&d, "gr(20, 10)"), one_color(&d, "rg(10, 20)"));
    }

    #[test]
    fn alias_cycles_fail_at_build_time() {
        let err = ColorDecoder::builder()
            .alias("a", "b")
            .alias("b", "a")
            .build()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("cyclic"));
        assert!(message.contains("a, b"));
    }

    #[test]
    fn alias_to_unknown_target_fails() {
        let err = ColorDecoder::builder()
            .alias("a", "nowhere")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("undefined function 'nowhere'"));
    }

    #[test]
    fn alias_dropping_required_parameter_fails() {
        let err = ColorDecoder::builder()
            .function("rg", swap_spec())
            .alias_reordered("r", "rg", &["red"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("left without a value"));
    }

    #[test]
    fn chained_aliases_resolve() {
        let d = ColorDecoder::builder()
            .function("gray", gray_spec())
            .alias("a", "b")
            .alias("b", "gray")
            .build()
            .unwrap();
        assert_eq!(one_color(&d, "a(7)"), one_color(&d, "gray(7)"));
    }

    #[test]
    fn numbers_widen_and_narrow() {
        let spec = FunctionSpec::new(
            vec![
                Param::required("f", ParamKind::Float),
                Param::required("i", ParamKind::Int),
            ],
            |args| {
                let f = args[0].expect_number()?;
                let i = args[1].expect_number()?;
                Ok(Value::Float(f + i))
            },
        );
        let d = ColorDecoder::builder().function("add", spec).build().unwrap();
        let results = d.decode("add(1, 2.0)", false, false).unwrap();
        assert_eq!(results, vec![Value::Float(3.0)]);

        let err = d.decode("add(1, 2.5)", false, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a float did not match the expected integer for parameter 'i' \
             at column 7 in function 'add'"
        );
    }

    #[test]
    fn numbers_become_degrees_for_angle_parameters() {
        let spec = FunctionSpec::new(
            vec![Param::required("hue", ParamKind::Angle)],
            |args| Ok(Value::Angle(args[0].expect_angle()?)),
        );
        let d = ColorDecoder::builder().function("a", spec).build().unwrap();
        let results = d.decode("a(90)", false, false).unwrap();
        assert_eq!(results, vec![Value::Angle(Angle::Degrees(90.0))]);
    }

    #[test]
    fn calling_a_constant_fails() {
        let err = decoder().decode("dark(1)", false, false).unwrap_err();
        assert_eq!(err.to_string(), "'dark' is not a function at column 0");
    }

    #[test]
    fn bare_function_name_needs_a_fallback() {
        let err = decoder().decode("gray", false, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'gray' is not a value and has no fallback value at column 0"
        );

        let spec = gray_spec().with_fallback(Value::Color(Color::Srgb(black())));
        let d = ColorDecoder::builder().function("gray", spec).build().unwrap();
        assert_eq!(one_color(&d, "gray"), Color::Srgb(black()));
    }

    #[test]
    fn prefer_angles_wraps_bare_numbers() {
        let d = decoder();
        let results = d.decode("42", false, true).unwrap();
        assert_eq!(results, vec![Value::Angle(Angle::Degrees(42.0))]);
    }

    #[test]
    fn prefer_colors_reinterprets_bare_numbers() {
        let d = ColorDecoder::builder()
            .netscape_fallback(true)
            .build()
            .unwrap();
        let results = d.decode("123", true, false).unwrap();
        assert!(matches!(results.as_slice(), [Value::Color(_)]));

        // Without the fallback switch the number stays a number.
        let d = decoder();
        let results = d.decode("123", true, false).unwrap();
        assert_eq!(results, vec![Value::Integer(123)]);
    }

    #[test]
    fn multiple_top_level_results() {
        let d = decoder();
        let results = d.decode("gray(1) / gray(2)", false, false).unwrap();
        assert_eq!(results.len(), 2);
    }
}
