//! Generic argument stack.
//!
//! While walking through generic instantiations the resolver keeps a stack
//! of rendered argument lists, one frame per instantiation level. The stack
//! is a persistent cons list: pushing returns a new stack that shares its
//! tail with the old one, so each recursive call owns its own view and
//! nothing has to be popped on the way out (including early `?` returns).

use std::sync::Arc;

use smallvec::SmallVec;

/// Rendered arguments of one instantiation level.
pub type ArgNames = SmallVec<[String; 2]>;

#[derive(Debug)]
struct Frame {
    args: ArgNames,
    outer: GenericArgStack,
}

/// Persistent stack of generic argument name lists; the top is innermost.
#[derive(Clone, Debug, Default)]
pub struct GenericArgStack {
    top: Option<Arc<Frame>>,
    depth: usize,
}

impl GenericArgStack {
    /// An empty stack (no generic context).
    pub fn new() -> Self {
        Self::default()
    }

    /// A new stack with `args` on top of `self`.
    #[must_use]
    pub fn push(&self, args: ArgNames) -> Self {
        Self {
            top: Some(Arc::new(Frame {
                args,
                outer: self.clone(),
            })),
            depth: self.depth + 1,
        }
    }

    /// Innermost argument list, used to substitute generic parameters.
    pub fn innermost(&self) -> Option<&[String]> {
        self.top.as_deref().map(|frame| frame.args.as_slice())
    }

    /// Innermost argument at `index`.
    pub fn arg(&self, index: u32) -> Option<&str> {
        let index = usize::try_from(index).ok()?;
        self.innermost()?.get(index).map(String::as_str)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Materialize as nested vectors, outermost frame first.
    pub fn to_vec(&self) -> Vec<Vec<String>> {
        let mut frames = Vec::with_capacity(self.depth);
        let mut cursor = self.top.as_deref();
        while let Some(frame) = cursor {
            frames.push(frame.args.to_vec());
            cursor = frame.outer.top.as_deref();
        }
        frames.reverse();
        frames
    }
}
