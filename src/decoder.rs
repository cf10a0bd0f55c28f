//! Decoding: turn space-separated binary groups back into text.
//!
//! This path bypasses the tokenizer and parser entirely. Every group must be
//! a non-empty run of `0`/`1` naming a valid Unicode scalar value.

use log::trace;

use crate::error::{CompileError, CompileResult};

/// Decode `binary` into the characters its groups name, in order.
pub fn decode(binary: &str) -> CompileResult<String> {
  let mut out = String::new();
  let mut loc = 0;

  for group in binary.split(' ') {
    out.push(decode_group(binary, group, loc)?);
    loc += group.len() + 1;
  }

  Ok(out)
}

fn decode_group(binary: &str, group: &str, loc: usize) -> CompileResult<char> {
  if group.is_empty() {
    return Err(CompileError::at(binary, loc, "empty binary group"));
  }

  if let Some((i, c)) = group.char_indices().find(|&(_, c)| c != '0' && c != '1') {
    return Err(CompileError::at(
      binary,
      loc + i,
      format!("invalid binary digit {c:?}"),
    ));
  }

  let code = u32::from_str_radix(group, 2).map_err(|err| {
    CompileError::at(binary, loc, format!("invalid binary group \"{group}\": {err}"))
  })?;

  let c = char::from_u32(code).ok_or_else(|| {
    CompileError::at(
      binary,
      loc,
      format!("code {code:#x} is not a valid character"),
    )
  })?;
  trace!("group {group} -> {c:?}");
  Ok(c)
}
