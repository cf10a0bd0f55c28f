//! Shared error utilities used across the conversion pipeline.
//!
//! Decoding failures point at the offending binary group with a caret, the
//! same way a compiler diagnostic would. Validation failures carry the fixed
//! messages shown to whoever submitted the input.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  WithLocation {
    expr_line: String,
    marker: String,
    message: String,
  },

  #[snafu(display("Input cannot be empty."))]
  EmptyInput {},

  #[snafu(display("Invalid login! Finally entered \"!\" must be."))]
  MissingTerminator {},
}

impl CompileError {
  /// Construct an error anchored at a specific byte offset in the source.
  pub fn at(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let expr_line = format!("'{expr}'");
    let safe_loc = loc.min(expr.len());
    let char_offset = expr[..safe_loc].chars().count() + 1; // account for opening quote
    let marker = format!("{}^", " ".repeat(char_offset));
    Self::WithLocation {
      expr_line,
      marker,
      message: message.into(),
    }
  }

  /// The bare diagnostic text, without the source line and caret.
  pub fn message(&self) -> String {
    match self {
      Self::WithLocation { message, .. } => message.clone(),
      other => other.to_string(),
    }
  }
}
