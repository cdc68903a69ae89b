//! Error recovery for the parser.
//!
//! After a failed statement the parser skips ahead to a point where a new
//! statement can start: past the next `;` at the current nesting level, or
//! up to the `}` that closes the enclosing block.

use crate::Parser;
use monkey_ir::TokenKind;

/// Where the statement that failed was being parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// Top level of the program. A stray `}` is skipped like any token.
    Program,
    /// Inside `{ ... }`. The closing `}` is left for the block to consume.
    Block,
}

impl Parser<'_> {
    /// Advance to the next statement boundary.
    ///
    /// Braces opened while skipping are tracked so that a `;` or `}` inside
    /// a nested block does not count as the boundary.
    pub(crate) fn synchronize(&mut self, boundary: Boundary) {
        let mut depth = 0usize;
        loop {
            match self.cur.kind {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => {
                    self.next_token();
                    return;
                }
                TokenKind::RBrace if depth == 0 && boundary == Boundary::Block => return,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.next_token();
        }
    }
}
