pub mod errors;
pub mod context;
pub mod evaluator;
pub mod fs;
pub mod numeric;
pub mod line;
pub mod directive;
mod parser;

use std::path::Path;

use num_bigint::BigInt;

pub use context::{EvalOptions, EvaluationContext};
pub use directive::Directive;
pub use errors::{ErrorKind, EvalError, Result};
pub use evaluator::Evaluator;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};

/// Name `sum_str` gives its in-memory input.
pub const INLINE_INPUT: &str = "input.txt";

/// Sum a file on disk, following its includes.
pub fn sum_file(path: impl AsRef<Path>, options: EvalOptions) -> Result<BigInt> {
    Evaluator::new(OsFileSystem).evaluate_file(path.as_ref(), options)
}

/// Sum in-memory text. No other files exist, so an `@include` of anything
/// but the input itself fails with [`EvalError::IncludeIo`].
pub fn sum_str(text: &str, options: EvalOptions) -> Result<BigInt> {
    let fs = MemoryFileSystem::new().with_file(INLINE_INPUT, text);
    Evaluator::new(fs).evaluate_file(Path::new(INLINE_INPUT), options)
}
