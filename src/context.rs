use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default numeral base when the caller does not pick one.
pub const DEFAULT_BASE: u32 = 10;

/// Caller-facing knobs. Validating `base` against `2..=36` is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    pub base: u32,
    pub strict: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { base: DEFAULT_BASE, strict: false }
    }
}

/// Per-invocation evaluation state.
///
/// `base` is the starting base handed to the next file evaluated; each file
/// works on its own copy. `stack` holds the canonical identities of the files
/// currently being evaluated, outermost first.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    pub base: u32,
    pub strict: bool,
    stack: Vec<PathBuf>,
}

impl EvaluationContext {
    pub fn new(options: EvalOptions) -> Self {
        Self { base: options.base, strict: options.strict, stack: Vec::new() }
    }

    pub fn is_active(&self, identity: &Path) -> bool {
        self.stack.iter().any(|p| p == identity)
    }

    /// The active chain followed by `identity`, i.e. the cycle as it would close.
    pub(crate) fn chain_to(&self, identity: &Path) -> Vec<PathBuf> {
        let mut chain = self.stack.clone();
        chain.push(identity.to_path_buf());
        chain
    }

    pub(crate) fn push(&mut self, identity: PathBuf) {
        self.stack.push(identity);
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new(EvalOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_decimal_lenient() {
        let opts: EvalOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, EvalOptions { base: 10, strict: false });
        let opts: EvalOptions = serde_json::from_str(r#"{"strict":true}"#).unwrap();
        assert!(opts.strict);
        assert_eq!(opts.base, DEFAULT_BASE);
    }

    #[test]
    fn stack_tracks_active_files() {
        let mut ctx = EvaluationContext::default();
        ctx.push("/a".into());
        ctx.push("/b".into());
        assert!(ctx.is_active(Path::new("/a")));
        assert_eq!(ctx.chain_to(Path::new("/a")).len(), 3);
        ctx.pop();
        assert!(!ctx.is_active(Path::new("/b")));
        assert_eq!(ctx.depth(), 1);
    }
}
