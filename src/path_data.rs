//! Tokenizer and coordinate rewriter for SVG path data.
//!
//! Path data is a small command language: single-letter commands followed by
//! numeric arguments separated by commas or whitespace. Normalization shifts
//! absolute coordinates so the artwork starts at (0,0) and optionally applies
//! a uniform scale. Relative (lowercase) commands carry origin-independent
//! offsets and keep their values; a relative command opening a subpath after
//! an absolute one is NOT re-anchored.

use logos::Logos;

#[derive(Logos, Debug, PartialEq)]
enum PathToken {
    #[regex(r"[MmLlHhVvCcSsQqTtAaZz]", |lex| lex.slice().chars().next())]
    Command(char),

    #[regex(r"[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f32>().ok())]
    Number(f32),

    #[regex(r"[ \t\r\f\n,]+", logos::skip)]
    Separator,
}

#[derive(Debug, PartialEq)]
enum Arg {
    Number(f32),
    /// A token that is not a plain coordinate (arc flags glued to other
    /// characters, stray garbage). Carried through untouched.
    Verbatim(String),
}

/// One command letter and its argument list. `command` is `None` only for
/// tokens appearing before the first command letter.
#[derive(Debug, Default)]
struct Segment {
    command: Option<char>,
    args: Vec<Arg>,
}

/// Combines the extracted path strings into one normalized path string.
///
/// Absolute coordinates are shifted by (-min_x, -min_y) and scaled; numbers
/// are re-emitted at two decimal places with trailing zeros stripped. When
/// the input is already origin-normalized and the scale is 1.0 the
/// concatenation is returned unchanged, byte for byte.
pub fn normalize_paths(paths: &[String], min_x: f32, min_y: f32, scale: f32) -> String {
    if paths.is_empty() {
        return String::new();
    }

    let combined = paths.join(" ");

    if min_x == 0.0 && min_y == 0.0 && scale == 1.0 {
        return combined;
    }

    tokenize(&combined)
        .iter()
        .map(|segment| render_segment(segment, min_x, min_y, scale))
        .collect::<Vec<String>>()
        .join(" ")
}

fn tokenize(data: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Segment::default();
    let mut lexer = PathToken::lexer(data);

    while let Some(token) = lexer.next() {
        match token {
            Ok(PathToken::Command(c)) => {
                if current.command.is_some() || !current.args.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                current.command = Some(c);
            }
            Ok(PathToken::Number(n)) => current.args.push(Arg::Number(n)),
            Ok(PathToken::Separator) => unreachable!(),
            Err(()) => current.args.push(Arg::Verbatim(lexer.slice().to_string())),
        }
    }

    if current.command.is_some() || !current.args.is_empty() {
        segments.push(current);
    }
    segments
}

/// Re-emits one segment, pairing numeric arguments alternately as x,y.
/// Only uppercase (absolute) commands are shifted and scaled.
fn render_segment(segment: &Segment, min_x: f32, min_y: f32, scale: f32) -> String {
    let absolute = segment.command.is_some_and(|c| c.is_ascii_uppercase());
    let adjust_x = |x: f32| if absolute { (x - min_x) * scale } else { x };
    let adjust_y = |y: f32| if absolute { (y - min_y) * scale } else { y };

    let mut parts: Vec<String> = Vec::new();
    let mut pending_x: Option<f32> = None;

    for arg in &segment.args {
        match arg {
            Arg::Number(n) => {
                if let Some(x) = pending_x.take() {
                    parts.push(format!(
                        "{},{}",
                        format_coord(adjust_x(x)),
                        format_coord(adjust_y(*n))
                    ));
                } else {
                    pending_x = Some(*n);
                }
            }
            Arg::Verbatim(token) => {
                if let Some(x) = pending_x.take() {
                    parts.push(format_coord(adjust_x(x)));
                }
                parts.push(token.clone());
            }
        }
    }
    if let Some(x) = pending_x {
        parts.push(format_coord(adjust_x(x)));
    }

    match segment.command {
        Some(c) => format!("{}{}", c, parts.join(" ")),
        None => parts.join(" "),
    }
}

/// Two decimal places with trailing zeros and a dangling decimal point
/// stripped: 12.50 -> "12.5", 12.00 -> "12".
fn format_coord(value: f32) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
