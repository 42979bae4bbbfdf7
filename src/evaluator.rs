// src/evaluator.rs
use std::path::{Path, PathBuf};

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::context::{EvalOptions, EvaluationContext};
use crate::directive::{parse_directive, Directive, MAX_BASE, MIN_BASE};
use crate::errors::{EvalError, Result};
use crate::fs::FileSystem;
use crate::line::{classify, split_lines, strip_bom, Line};
use crate::numeric::{parse_integer, range_sum};

/// Sums directive files read through a [`FileSystem`].
pub struct Evaluator<F> {
    fs: F,
}

impl<F: FileSystem> Evaluator<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Top-level entry: checks the starting base and that the input exists,
    /// then evaluates it with a fresh context built from `options`.
    pub fn evaluate_file(&self, path: &Path, options: EvalOptions) -> Result<BigInt> {
        if !(MIN_BASE..=MAX_BASE).contains(&options.base) {
            return Err(EvalError::Parse {
                file: path.to_path_buf(),
                line: 0,
                message: format!(
                    "starting base must be in {MIN_BASE}..{MAX_BASE}, got {}",
                    options.base
                ),
            });
        }
        if !self.fs.exists(path) {
            return Err(EvalError::InputFile {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            });
        }
        let mut ctx = EvaluationContext::new(options);
        self.evaluate(path, &mut ctx)
    }

    /// Evaluate one file starting from `ctx.base`.
    ///
    /// The file's identity is on `ctx`'s stack for exactly the duration of
    /// this call, and `ctx.base` is back to its entry value on return, so
    /// `@base` changes made here never reach the caller.
    pub fn evaluate(&self, path: &Path, ctx: &mut EvaluationContext) -> Result<BigInt> {
        let identity = self
            .fs
            .canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf());
        if ctx.is_active(&identity) {
            return Err(EvalError::IncludeCycle { chain: ctx.chain_to(&identity) });
        }

        let inherited = ctx.base;
        ctx.push(identity);
        let result = self.evaluate_lines(path, ctx);
        ctx.pop();
        ctx.base = inherited;
        result
    }

    fn evaluate_lines(&self, path: &Path, ctx: &mut EvaluationContext) -> Result<BigInt> {
        let text = self.fs.read_to_string(path).map_err(|e| {
            let reason = e.to_string();
            let path = path.to_path_buf();
            if ctx.depth() <= 1 {
                EvalError::InputFile { path, reason }
            } else {
                EvalError::IncludeIo { path, reason }
            }
        })?;
        debug!(file = %path.display(), base = ctx.base, depth = ctx.depth(), "evaluating file");

        let mut base = ctx.base;
        let mut total = BigInt::zero();
        for (idx, raw) in split_lines(strip_bom(&text)).into_iter().enumerate() {
            let line = idx + 1;
            let parse_error = |message: String| EvalError::Parse {
                file: path.to_path_buf(),
                line,
                message,
            };

            match classify(raw) {
                Line::Blank | Line::Comment => {}
                Line::Directive(directive) => match parse_directive(directive).map_err(parse_error)? {
                    Directive::SetBase(b) => {
                        debug!(file = %path.display(), line, base = b, "base changed");
                        base = b;
                    }
                    Directive::Include(target) => {
                        let resolved = resolve_include(path, target);
                        if !self.fs.exists(&resolved) {
                            return Err(EvalError::IncludeIo {
                                path: resolved,
                                reason: "not found".into(),
                            });
                        }
                        debug!(from = %path.display(), target = %resolved.display(), base, "including");
                        ctx.base = base;
                        total += self.evaluate(&resolved, ctx)?;
                    }
                    Directive::Range(a, b) => {
                        let endpoint = |tok: &str| {
                            parse_integer(tok, base).ok_or_else(|| {
                                parse_error(format!("invalid @range endpoint {tok:?} in base {base}"))
                            })
                        };
                        let (low, high) = (endpoint(a)?, endpoint(b)?);
                        let sum = range_sum(&low, &high);
                        debug!(file = %path.display(), line, %low, %high, %sum, "range");
                        total += sum;
                    }
                },
                Line::Data(token) => match parse_integer(token, base) {
                    Some(value) => total += value,
                    None if ctx.strict => {
                        return Err(parse_error(format!("invalid token {token:?} in base {base}")));
                    }
                    None => trace!(file = %path.display(), line, token, "skipping invalid token"),
                },
            }
        }

        debug!(file = %path.display(), %total, "file done");
        Ok(total)
    }
}

/// Relative include targets hang off the including file's directory.
pub fn resolve_include(including: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    if target.is_absolute() {
        return target.to_path_buf();
    }
    match including.parent() {
        Some(dir) => dir.join(target),
        None => target.to_path_buf(),
    }
}
