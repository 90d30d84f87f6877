//! Line-based scenario files describing a catalog of bodies.
//!
//! One body per line:
//!
//! ```text
//! # comment
//! body Sun mass 1.989e30 at (0, 0) vel (0, 0) size 1.391e9 color yellow
//! body Earth mass 5.972e24 at (-0.1786au, 0.887224au) vel circular size 1.2742e7 color blue
//! ```
//!
//! Coordinates accept an `au` suffix; colors are a small named set or
//! `#rrggbb`; a trailing `notrace` starts the body with its trace hidden.
//! This module checks syntax only; semantic validation (duplicate names,
//! positive masses, ...) lives in `catalog::build`.

use crate::catalog::{BodySpec, Velocity, AU};
use glam::DVec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

impl ScenarioError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// Parse scenario text into body specs.
pub fn parse_scenario(source: &str) -> Result<Vec<BodySpec>, ScenarioError> {
    let mut specs = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parens and commas are separator noise; the grammar is keyword-led.
        let cleaned: String = line
            .chars()
            .map(|c| if c == '(' || c == ')' || c == ',' { ' ' } else { c })
            .collect();
        let mut tokens = cleaned.split_whitespace();

        let keyword = tokens.next().unwrap_or_default();
        if keyword != "body" {
            return Err(ScenarioError::syntax(
                line_no,
                format!("expected 'body', found '{}'", keyword),
            ));
        }
        specs.push(parse_body(line_no, &mut tokens)?);
    }

    Ok(specs)
}

fn parse_body<'a>(
    line: usize,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<BodySpec, ScenarioError> {
    let name = next_token(line, tokens, "body name")?.to_string();

    expect_keyword(line, tokens, "mass")?;
    let mass = parse_number(line, next_token(line, tokens, "mass value")?)?;

    expect_keyword(line, tokens, "at")?;
    let x = parse_length(line, next_token(line, tokens, "x coordinate")?)?;
    let y = parse_length(line, next_token(line, tokens, "y coordinate")?)?;

    expect_keyword(line, tokens, "vel")?;
    let first = next_token(line, tokens, "velocity")?;
    let velocity = if first == "circular" {
        Velocity::Circular
    } else {
        let vx = parse_number(line, first)?;
        let vy = parse_number(line, next_token(line, tokens, "y velocity")?)?;
        Velocity::Fixed(DVec2::new(vx, vy))
    };

    expect_keyword(line, tokens, "size")?;
    let size = parse_number(line, next_token(line, tokens, "size value")?)?;

    expect_keyword(line, tokens, "color")?;
    let color = parse_color(line, next_token(line, tokens, "color value")?)?;

    let mut show_trace = true;
    for extra in tokens {
        if extra == "notrace" && show_trace {
            show_trace = false;
        } else {
            return Err(ScenarioError::syntax(
                line,
                format!("unexpected trailing token '{}'", extra),
            ));
        }
    }

    Ok(BodySpec {
        name,
        mass,
        position: DVec2::new(x, y),
        velocity,
        size,
        color,
        show_trace,
    })
}

fn next_token<'a>(
    line: usize,
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str, ScenarioError> {
    tokens
        .next()
        .ok_or_else(|| ScenarioError::syntax(line, format!("missing {}", what)))
}

fn expect_keyword<'a>(
    line: usize,
    tokens: &mut impl Iterator<Item = &'a str>,
    keyword: &str,
) -> Result<(), ScenarioError> {
    let token = next_token(line, tokens, &format!("'{}'", keyword))?;
    if token == keyword {
        Ok(())
    } else {
        Err(ScenarioError::syntax(
            line,
            format!("expected '{}', found '{}'", keyword, token),
        ))
    }
}

fn parse_number(line: usize, token: &str) -> Result<f64, ScenarioError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ScenarioError::syntax(line, format!("invalid number '{}'", token)))?;
    // "nan" and "inf" parse as valid f64 and would poison every position
    // they touch; an overflowing literal saturates to infinity the same way.
    if !value.is_finite() {
        return Err(ScenarioError::syntax(
            line,
            format!("non-finite number '{}'", token),
        ));
    }
    Ok(value)
}

/// A number with an optional `au` suffix.
fn parse_length(line: usize, token: &str) -> Result<f64, ScenarioError> {
    match token.strip_suffix("au").or_else(|| token.strip_suffix("AU")) {
        Some(stripped) => Ok(parse_number(line, stripped)? * AU),
        None => parse_number(line, token),
    }
}

fn parse_color(line: usize, token: &str) -> Result<[u8; 3], ScenarioError> {
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ScenarioError::syntax(
                line,
                format!("expected #rrggbb, found '{}'", token),
            ));
        }
        let channel = |s: &str| u8::from_str_radix(s, 16);
        return match (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])) {
            (Ok(r), Ok(g), Ok(b)) => Ok([r, g, b]),
            _ => Err(ScenarioError::syntax(
                line,
                format!("invalid hex color '{}'", token),
            )),
        };
    }
    match token {
        "yellow" => Ok([255, 255, 0]),
        "gray" => Ok([128, 128, 128]),
        "orange" => Ok([255, 165, 0]),
        "blue" => Ok([0, 0, 255]),
        "red" => Ok([255, 0, 0]),
        "brown" => Ok([165, 42, 42]),
        "goldenrod" => Ok([218, 165, 32]),
        "cyan" => Ok([0, 255, 255]),
        "blueviolet" => Ok([138, 43, 226]),
        "white" => Ok([255, 255, 255]),
        _ => Err(ScenarioError::syntax(
            line,
            format!("unknown color '{}'", token),
        )),
    }
}
