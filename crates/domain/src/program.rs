//! Program — a tree of sequential and parallel groups of device commands.
//!
//! A [`Program`] only *describes* a schedule. Nothing runs until the tree is
//! handed to the application layer's program runner, which interprets each
//! node:
//!
//! | Node | Semantics |
//! |------|-----------|
//! | [`Run`](Program::Run) | dispatch the messages one after the other |
//! | [`Sequence`](Program::Sequence) | run children in order, each to completion |
//! | [`Parallel`](Program::Parallel) | run children concurrently, wait for all |

use serde::{Deserialize, Serialize};

use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "steps", rename_all = "snake_case")]
pub enum Program {
    /// Leaf: an ordered list of messages handed to the registry in one call.
    Run(Vec<Message>),
    /// Children run strictly one after the other.
    Sequence(Vec<Program>),
    /// Children run concurrently; the group ends when all of them ended.
    Parallel(Vec<Program>),
}

impl Program {
    #[must_use]
    pub fn run(messages: impl IntoIterator<Item = Message>) -> Self {
        Self::Run(messages.into_iter().collect())
    }

    #[must_use]
    pub fn sequence(steps: impl IntoIterator<Item = Program>) -> Self {
        Self::Sequence(steps.into_iter().collect())
    }

    #[must_use]
    pub fn parallel(steps: impl IntoIterator<Item = Program>) -> Self {
        Self::Parallel(steps.into_iter().collect())
    }

    /// Every leaf message, depth-first in declaration order.
    #[must_use]
    pub fn messages(&self) -> Vec<&Message> {
        let mut out = Vec::new();
        self.collect_messages(&mut out);
        out
    }

    fn collect_messages<'a>(&'a self, out: &mut Vec<&'a Message>) {
        match self {
            Self::Run(messages) => out.extend(messages),
            Self::Sequence(steps) | Self::Parallel(steps) => {
                for step in steps {
                    step.collect_messages(out);
                }
            }
        }
    }

    /// Number of leaf messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Run(messages) => messages.len(),
            Self::Sequence(steps) | Self::Parallel(steps) => steps.iter().map(Self::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join<T: std::fmt::Display>(
            f: &mut std::fmt::Formatter<'_>,
            items: &[T],
        ) -> std::fmt::Result {
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Self::Run(messages) => {
                f.write_str("run[")?;
                let kinds: Vec<_> = messages.iter().map(Message::kind).collect();
                join(f, &kinds)?;
                f.write_str("]")
            }
            Self::Sequence(steps) => {
                f.write_str("seq(")?;
                join(f, steps)?;
                f.write_str(")")
            }
            Self::Parallel(steps) => {
                f.write_str("par(")?;
                join(f, steps)?;
                f.write_str(")")
            }
        }
    }
}
