use serde::{Deserialize, Serialize};

/// A chain-of-thought rewrite of retrieved knowledge: ordered "Reason"
/// and "Knowledge" lines, rendered one per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningChain {
    pub lines: Vec<String>,
}

impl ReasoningChain {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// A single-line chain, used for sentinel output.
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Join all lines with newlines, the form handed to the LLM prompt.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
