//! Code generation: lower the program tree into binary character codes.
//!
//! Each character of a literal becomes its code point written in base 2
//! without padding, and the codes of one literal are separated by a single
//! space. Program children are concatenated as-is, so two literals in a row
//! touch without a separator between them.

use crate::parser::{AstNode, Program};

/// Emit the binary rendering of a whole program.
pub fn generate(program: &Program) -> String {
  let mut out = String::new();
  for node in &program.body {
    emit_node(node, &mut out);
  }
  out
}

fn emit_node(node: &AstNode, out: &mut String) {
  match node {
    AstNode::StringLiteral { value } => emit_literal(value, out),
    // The terminator only marks the end of input.
    AstNode::EndOperator { .. } => {}
  }
}

fn emit_literal(value: &str, out: &mut String) {
  for (i, c) in value.chars().enumerate() {
    if i > 0 {
      out.push(' ');
    }
    out.push_str(&format!("{:b}", u32::from(c)));
  }
}
