//! Single-pass parser producing the program tree.
//!
//! The grammar is flat: a program is the token sequence with every token
//! lifted into exactly one node, in order. There is no backtracking and no
//! lookahead beyond the current token.

use log::trace;

use crate::tokenizer::{TERMINATOR, Token, TokenKind, describe_token, token_text};

/// Nodes that can appear in a program body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
  StringLiteral { value: String },
  EndOperator { symbol: char },
}

impl AstNode {
  pub fn string(value: impl Into<String>) -> Self {
    Self::StringLiteral {
      value: value.into(),
    }
  }

  pub fn end(symbol: char) -> Self {
    Self::EndOperator { symbol }
  }
}

/// Root of the tree. The body mirrors token order one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
  pub body: Vec<AstNode>,
}

impl Program {
  /// Whether the program was closed by a terminator.
  pub fn is_terminated(&self) -> bool {
    matches!(self.body.last(), Some(AstNode::EndOperator { .. }))
  }
}

/// Build a program from the token stream.
pub fn parse(tokens: Vec<Token>, source: &str) -> Program {
  let mut stream = TokenStream::new(tokens, source);
  let mut body = Vec::with_capacity(stream.tokens.len());

  while let Some(node) = stream.walk() {
    body.push(node);
  }

  Program { body }
}

struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Lift the current token into a node and advance past it.
  fn walk(&mut self) -> Option<AstNode> {
    let token = self.peek()?;
    trace!("walk {}", describe_token(Some(token), self.source));

    let node = match token.kind {
      TokenKind::Literal => AstNode::string(token_text(token, self.source)),
      TokenKind::Terminator => AstNode::end(TERMINATOR),
    };
    self.pos += 1;
    Some(node)
  }
}
