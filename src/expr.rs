/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::err::ColorError;
use crate::token::{Token, TokenKind};

/// A node of the call tree built from the token stream.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    /// A value token carried as-is, including empty arguments.
    Literal(Token),
    Call {
        callee: Callee,
        args: Vec<Expr>,
        column: usize,
    },
}

impl Expr {
    pub(crate) fn column(&self) -> usize {
        match self {
            Expr::Literal(token) => token.column,
            Expr::Call { column, .. } => *column,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Callee {
    Named(String),
    /// The grouping function behind the natural color shorthand. Its first
    /// argument is always the hue angle literal injected from the shorthand
    /// token itself.
    ImplicitNcol,
}

/// A call whose closing token has not been seen yet.
enum Frame {
    Named { name: String, column: usize },
    /// An implicit ncol group: consumes up to `remaining` more value tokens,
    /// then folds on its own.
    Implicit { token: Token, remaining: i32 },
    /// An ncol group with explicit parentheses, folding at the matching
    /// closing parenthesis instead of by count.
    NcolGroup { token: Token },
}

impl Frame {
    fn display_name(&self) -> &str {
        match self {
            Frame::Named { name, .. } => name,
            Frame::Implicit { .. } | Frame::NcolGroup { .. } => "<implicit ncol function>",
        }
    }
}

struct TreeBuilder {
    stack: Vec<Vec<Expr>>,
    frames: Vec<Frame>,
    current: Vec<Expr>,
    max_depth: usize,
}

impl TreeBuilder {
    fn parent_name(&self) -> Option<&str> {
        self.frames.last().map(Frame::display_name)
    }

    fn check_depth(&self, column: usize) -> Result<(), ColorError> {
        if self.frames.len() >= self.max_depth {
            return Err(ColorError::expression(
                format!("maximum nesting depth of {} exceeded", self.max_depth),
                Some(column),
            ));
        }
        Ok(())
    }

    fn open(&mut self, frame: Frame) {
        self.frames.push(frame);
        self.stack.push(std::mem::take(&mut self.current));
    }

    /// Folds the implicit group on top of the frame stack into its parent
    /// argument list.
    fn fold_implicit(&mut self, token: Token) {
        let column = token.column;
        let mut args = vec![Expr::Literal(token)];
        args.append(&mut self.current);
        let mut parent = self.stack.pop().unwrap_or_default();
        parent.push(Expr::Call {
            callee: Callee::ImplicitNcol,
            args,
            column,
        });
        self.current = parent;
    }

    fn fold_named(&mut self, name: String, column: usize) {
        let args = std::mem::take(&mut self.current);
        let mut parent = self.stack.pop().unwrap_or_default();
        parent.push(Expr::Call {
            callee: Callee::Named(name),
            args,
            column,
        });
        self.current = parent;
    }
}

/// Builds the list of top-level expressions from a token stream.
///
/// Explicit calls open when a name is followed by `(` and close at the
/// matching `)`. A natural color shorthand opens an implicit three-argument
/// group instead: the shorthand supplies the hue, and the group closes once
/// two more value tokens arrived, at an enclosing `)`, or at the end of the
/// input, whichever comes first. When the shorthand is directly followed by
/// parentheses, those delimit its argument list explicitly.
pub(crate) fn parse(
    tokens: Vec<Token>,
    ncol_support: bool,
    max_depth: usize,
    expr_len: usize,
) -> Result<Vec<Expr>, ColorError> {
    let mut b = TreeBuilder {
        stack: Vec::new(),
        frames: Vec::new(),
        current: Vec::new(),
        max_depth,
    };

    for token in tokens {
        match token.kind {
            TokenKind::Ncol(_) if ncol_support => {
                b.check_depth(token.column)?;
                b.open(Frame::Implicit {
                    remaining: 3,
                    token,
                });
            }
            TokenKind::Ncol(_) => {
                // Without shorthand support the text is looked up as a name.
                b.current.push(Expr::Literal(Token {
                    kind: TokenKind::Name(token.rawtext.clone()),
                    column: token.column,
                    rawtext: token.rawtext,
                }));
            }
            TokenKind::CallStart => {
                if matches!(b.frames.last(), Some(Frame::Implicit { .. })) {
                    if b.current.is_empty() {
                        // `R30(...)`: the parentheses bind to the shorthand
                        // itself and delimit its arguments.
                        let Some(Frame::Implicit { token: ncol, .. }) = b.frames.pop() else {
                            unreachable!()
                        };
                        b.frames.push(Frame::NcolGroup { token: ncol });
                        continue;
                    }
                    if let Some(Frame::Implicit { remaining, .. }) = b.frames.last_mut() {
                        // The name about to be consumed was counted as a
                        // value; give the slot back.
                        *remaining += 1;
                    }
                }
                let name_token = b.current.pop().ok_or_else(|| {
                    ColorError::in_function(
                        "expected the name of the function to call",
                        Some(token.column),
                        b.parent_name(),
                    )
                })?;
                match name_token {
                    Expr::Literal(Token {
                        kind: TokenKind::Name(name),
                        column,
                        ..
                    }) => {
                        b.check_depth(token.column)?;
                        b.open(Frame::Named { name, column });
                    }
                    other => {
                        let (what, column) = match &other {
                            Expr::Literal(t) => (t.kind.kind_name(), t.column),
                            Expr::Call { column, .. } => ("call", *column),
                        };
                        return Err(ColorError::in_function(
                            format!(
                                "expected the name of the function to call, got a {what}"
                            ),
                            Some(column),
                            b.parent_name(),
                        ));
                    }
                }
            }
            TokenKind::CallEnd => {
                // Implicit groups close from the innermost out until an
                // explicit one matches this parenthesis.
                loop {
                    match b.frames.pop() {
                        Some(Frame::Implicit { token: ncol, .. }) => b.fold_implicit(ncol),
                        Some(Frame::NcolGroup { token: ncol }) => {
                            b.fold_implicit(ncol);
                            break;
                        }
                        Some(Frame::Named { name, column }) => {
                            b.fold_named(name, column);
                            break;
                        }
                        None => {
                            return Err(ColorError::expression(
                                "extraneous closing parenthesis",
                                Some(token.column),
                            ));
                        }
                    }
                }
            }
            _ => b.current.push(Expr::Literal(token)),
        }

        // An implicit group on top consumes one slot per token and folds
        // once its argument count is reached.
        let folds_now = match b.frames.last_mut() {
            Some(Frame::Implicit { remaining, .. }) => {
                *remaining -= 1;
                *remaining <= 0
            }
            _ => false,
        };
        if folds_now {
            let Some(Frame::Implicit { token: ncol, .. }) = b.frames.pop() else {
                unreachable!()
            };
            b.fold_implicit(ncol);
        }
    }

    // Leftover implicit groups fold with what they have; an explicit call
    // still open means its parenthesis was never closed.
    while let Some(frame) = b.frames.pop() {
        match frame {
            Frame::Implicit { token: ncol, .. } => b.fold_implicit(ncol),
            Frame::Named { .. } | Frame::NcolGroup { .. } => {
                return Err(ColorError::in_function(
                    "missing closing parenthesis",
                    Some(expr_len),
                    b.frames.last().map(Frame::display_name),
                ));
            }
        }
    }

    Ok(b.current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn parse_text(expr: &str, ncol: bool) -> Result<Vec<Expr>, ColorError> {
        parse(tokenize(expr, true)?, ncol, 64, expr.chars().count())
    }

    fn call_name(expr: &Expr) -> &str {
        match expr {
            Expr::Call {
                callee: Callee::Named(name),
                ..
            } => name,
            other => panic!("expected a named call, got {other:?}"),
        }
    }

    #[test]
    fn explicit_call() {
        let roots = parse_text("rgb(255, 0, 0)", false).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(call_name(&roots[0]), "rgb");
        let Expr::Call { args, .. } = &roots[0] else {
            unreachable!()
        };
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn nested_calls() {
        let roots = parse_text("darker(0.1, rgb(255, 0, 0))", false).unwrap();
        let Expr::Call { args, .. } = &roots[0] else {
            unreachable!()
        };
        assert_eq!(args.len(), 2);
        assert_eq!(call_name(&args[1]), "rgb");
    }

    #[test]
    fn implicit_ncol_folds_after_three_values() {
        let roots = parse_text("R30, 50%, 20%", true).unwrap();
        assert_eq!(roots.len(), 1);
        let Expr::Call { callee, args, .. } = &roots[0] else {
            panic!("expected a call");
        };
        assert_eq!(*callee, Callee::ImplicitNcol);
        // Injected hue plus the two supplied values.
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn implicit_ncol_folds_early_at_end_of_input() {
        let roots = parse_text("R30", true).unwrap();
        let Expr::Call { callee, args, .. } = &roots[0] else {
            panic!("expected a call");
        };
        assert_eq!(*callee, Callee::ImplicitNcol);
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn parenthesized_ncol_group() {
        let roots = parse_text("R30(10, 20)", true).unwrap();
        assert_eq!(roots.len(), 1);
        let Expr::Call { callee, args, .. } = &roots[0] else {
            panic!("expected a call");
        };
        assert_eq!(*callee, Callee::ImplicitNcol);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn explicit_call_inside_implicit_group_counts_once() {
        // The call result is a single argument of the implicit group.
        let roots = parse_text("R30, red(blue), 20%", true).unwrap();
        assert_eq!(roots.len(), 1);
        let Expr::Call { args, .. } = &roots[0] else {
            panic!("expected a call");
        };
        assert_eq!(args.len(), 3);
        assert_eq!(call_name(&args[1]), "red");
    }

    #[test]
    fn without_support_the_shorthand_is_a_name() {
        let roots = parse_text("R30", false).unwrap();
        assert_eq!(
            roots[0],
            Expr::Literal(Token {
                kind: TokenKind::Name("R30".to_string()),
                column: 0,
                rawtext: "R30".to_string(),
            })
        );
    }

    #[test]
    fn missing_closing_parenthesis() {
        let err = parse_text("rgb(1, 2", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing closing parenthesis at column 8"
        );
    }

    #[test]
    fn extraneous_closing_parenthesis() {
        let err = parse_text("red)", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "extraneous closing parenthesis at column 3"
        );
    }

    #[test]
    fn call_start_needs_a_name() {
        let err = parse_text("(1)", false).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("expected the name of the function to call")
        );

        let err = parse_text("5(1)", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected the name of the function to call, got a integer at column 0"
        );
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let mut expr = String::new();
        for _ in 0..70 {
            expr.push_str("ncol(");
        }
        expr.push_str("red");
        for _ in 0..70 {
            expr.push(')');
        }
        let err = parse_text(&expr, false).unwrap_err();
        assert!(err.to_string().contains("maximum nesting depth"));
    }
}
