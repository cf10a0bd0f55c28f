//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! Only one character is special: the `!` terminator. Every maximal run of
//! other characters becomes a single literal token, so the tokenizer never
//! rejects input.

use log::trace;

/// The end-of-input marker that closes every submission.
pub const TERMINATOR: char = '!';

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Literal,
  Terminator,
}

/// Thin wrapper for lexical information needed by later stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  pub fn new(kind: TokenKind, loc: usize, len: usize) -> Self {
    Self { kind, loc, len }
  }
}

/// Lex the input into a flat vector of literal and terminator tokens.
///
/// Tokens appear in source order. An empty input yields no tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut chars = input.char_indices().peekable();

  while let Some(&(start, c)) = chars.peek() {
    if c == TERMINATOR {
      chars.next();
      tokens.push(Token::new(TokenKind::Terminator, start, c.len_utf8()));
      continue;
    }

    let mut end = start;
    while let Some(&(i, c)) = chars.peek()
      && c != TERMINATOR
    {
      end = i + c.len_utf8();
      chars.next();
    }
    tokens.push(Token::new(TokenKind::Literal, start, end - start));
  }

  for token in &tokens {
    trace!("token {:?} {:?}", token.kind, token_text(token, input));
  }

  tokens
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: Option<&Token>, source: &str) -> String {
  match token {
    Some(t) => match t.kind {
      TokenKind::Terminator => format!("terminator '{TERMINATOR}'"),
      TokenKind::Literal => format!("literal \"{}\"", token_text(t, source)),
    },
    None => "EOF".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|t| t.kind).collect()
  }

  #[test]
  fn literal_then_terminator() {
    let src = "hi!";
    let tokens = tokenize(src);
    assert_eq!(kinds(src), vec![TokenKind::Literal, TokenKind::Terminator]);
    assert_eq!(token_text(&tokens[0], src), "hi");
    assert_eq!(token_text(&tokens[1], src), "!");
  }

  #[test]
  fn no_terminator_is_one_literal() {
    let src = "hello world";
    let tokens = tokenize(src);
    assert_eq!(tokens, vec![Token::new(TokenKind::Literal, 0, src.len())]);
  }

  #[test]
  fn only_terminators() {
    assert_eq!(kinds("!!"), vec![TokenKind::Terminator, TokenKind::Terminator]);
  }

  #[test]
  fn empty_input() {
    assert!(tokenize("").is_empty());
  }

  #[test]
  fn interleaved_runs_keep_order() {
    let src = "a!bc!!d";
    let tokens = tokenize(src);
    let texts: Vec<&str> = tokens.iter().map(|t| token_text(t, src)).collect();
    assert_eq!(texts, vec!["a", "!", "bc", "!", "!", "d"]);
  }

  #[test]
  fn multibyte_literal() {
    let src = "héé!";
    let tokens = tokenize(src);
    assert_eq!(token_text(&tokens[0], src), "héé");
    assert_eq!(tokens[1].loc, "héé".len());
  }

  #[test]
  fn describes_tokens() {
    let src = "x!";
    let tokens = tokenize(src);
    assert_eq!(describe_token(tokens.first(), src), "literal \"x\"");
    assert_eq!(describe_token(tokens.get(1), src), "terminator '!'");
    assert_eq!(describe_token(tokens.get(2), src), "EOF");
  }
}
