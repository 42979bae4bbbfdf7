// src/directive.rs
use crate::parser::Parser;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// One parsed `@` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    SetBase(u32),
    Include(&'a str),
    /// Endpoint tokens, still unparsed; they depend on the current base.
    Range(&'a str, &'a str),
}

/// Parse a trimmed line starting with `@`. The error is a message suitable
/// for a parse error.
pub fn parse_directive(line: &str) -> Result<Directive<'_>, String> {
    let mut p = Parser::new(line);
    if !p.consume_char('@') {
        return Err(format!("not a directive: {line}"));
    }
    let command = p.parse_word();
    p.skip_ws();
    let arg = p.rest();

    match command.to_ascii_lowercase().as_str() {
        "base" => parse_base(arg).map(Directive::SetBase),
        "include" => single_arg("include", arg).map(Directive::Include),
        "range" => {
            let arg = single_arg("range", arg)?;
            let (low, high) = arg
                .split_once("..")
                .ok_or_else(|| format!("@range expects <A>..<B>, got {arg:?}"))?;
            if low.is_empty() || high.is_empty() {
                return Err(format!("@range expects <A>..<B>, got {arg:?}"));
            }
            Ok(Directive::Range(low, high))
        }
        _ => Err(format!("unknown directive: {line}")),
    }
}

/// `@include` and `@range` take exactly one whitespace-free argument.
fn single_arg<'a>(name: &str, arg: &'a str) -> Result<&'a str, String> {
    match arg.split_whitespace().count() {
        1 => Ok(arg),
        0 => Err(format!("@{name} requires an argument")),
        _ => Err(format!("@{name} takes exactly one argument, got {arg:?}")),
    }
}

fn parse_base(arg: &str) -> Result<u32, String> {
    if arg.is_empty() {
        return Err("@base requires a value".into());
    }
    match arg.parse::<u32>() {
        Ok(b) if (MIN_BASE..=MAX_BASE).contains(&b) => Ok(b),
        _ => Err(format!("@base value must be a decimal integer in {MIN_BASE}..{MAX_BASE}, got {arg:?}")),
    }
}
