//! Call stack tracking for the evaluator.
//!
//! Each Monkey function call pushes a [`CallFrame`]; the depth check is
//! part of `push`, so unbounded recursion in a script turns into an
//! ordinary runtime error instead of exhausting host memory.

use crate::errors::call_depth_exceeded;
use crate::EvalError;
use monkey_ir::{Name, Span};

/// A single frame in the live call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Callee name when the call was through an identifier (`f(1)`), `None`
    /// for calls on arbitrary expressions (`fn(x) { x }(1)`).
    pub name: Option<Name>,
    /// Source location of the call expression.
    pub call_span: Span,
}

/// Live call stack for the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is not pushed when the limit is hit.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(call_depth_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Active frames, innermost last.
    pub fn frames(&self) -> &[CallFrame] {
        &self.frames
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}
