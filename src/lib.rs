//! Crate root: wires together the conversion pipeline.
//!
//! - `tokenizer` splits text into literal runs and `!` terminators.
//! - `parser` lifts the tokens into a flat program tree.
//! - `codegen` renders the tree as space-separated binary character codes.
//! - `decoder` goes the other way, from binary groups back to text.
//! - `error` holds the error type shared by the other modules.
//!
//! [`convert`] picks the direction by looking at the shape of the input.

pub mod codegen;
pub mod decoder;
pub mod error;
pub mod parser;
pub mod tokenizer;

use log::debug;
use snafu::ensure;

pub use error::{CompileError, CompileResult};
use error::{EmptyInputSnafu, MissingTerminatorSnafu};
use tokenizer::TERMINATOR;

/// Which half of the pipeline an input is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
  /// Binary groups to decode, terminator already stripped.
  Decode(&'a str),
  /// Text to run through tokenizer, parser and generator.
  Encode,
}

/// Whitespace as the submission form saw it: the Unicode space separators
/// and line terminators plus the byte order mark, but not NEL (U+0085).
pub fn is_input_whitespace(c: char) -> bool {
  match c {
    '\u{85}' => false,
    '\u{feff}' => true,
    c => c.is_whitespace(),
  }
}

/// Whether `trimmed` is one or more of `0`, `1` or whitespace followed by a
/// single terminator and nothing else.
pub fn looks_like_binary(trimmed: &str) -> bool {
  match trimmed.strip_suffix(TERMINATOR) {
    Some(body) => {
      !body.is_empty()
        && body
          .chars()
          .all(|c| c == '0' || c == '1' || is_input_whitespace(c))
    }
    None => false,
  }
}

/// Decide how `input` is converted. Binary always wins, so `"11!"` decodes.
pub fn route(input: &str) -> Route<'_> {
  let trimmed = input.trim_matches(is_input_whitespace);
  match trimmed.strip_suffix(TERMINATOR) {
    Some(body) if looks_like_binary(trimmed) => Route::Decode(body),
    _ => Route::Encode,
  }
}

/// Convert text to binary, or binary to text, depending on its shape.
pub fn convert(input: &str) -> CompileResult<String> {
  match route(input) {
    Route::Decode(binary) => {
      debug!("decoding {} bytes of binary", binary.len());
      decoder::decode(binary)
    }
    Route::Encode => {
      let tokens = tokenizer::tokenize(input);
      debug!("encoding {} tokens", tokens.len());
      let program = parser::parse(tokens, input);
      if !program.is_terminated() {
        debug!("program has no trailing terminator");
      }
      Ok(codegen::generate(&program))
    }
  }
}

/// Checks a submission before it is handed to [`convert`].
pub fn validate(input: &str) -> CompileResult<()> {
  ensure!(
    !input.trim_matches(is_input_whitespace).is_empty(),
    EmptyInputSnafu
  );
  ensure!(input.ends_with(TERMINATOR), MissingTerminatorSnafu);
  Ok(())
}

/// Validate and convert one submission.
pub fn compile(input: &str) -> CompileResult<String> {
  validate(input)?;
  convert(input)
}
