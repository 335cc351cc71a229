//! State behind the math block: stored expression and key interception.
//!
//! The math-input widget owns the editing surface. This side only mirrors
//! its value so that a host-initiated save sees the latest expression.

use serde::{Deserialize, Serialize};

use crate::block::Toolbox;

/// Toolbox entry for the math block.
pub const MATH_TOOLBOX: Toolbox = Toolbox {
    title: "Math",
    icon: "∑",
};

/// Saved data of one math block.
///
/// `content` is optional so that validation can tell a missing expression
/// apart from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MathData {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

/// Per-instance state of a math block.
#[derive(Debug, Clone)]
pub struct MathBlockState {
    data: MathData,
    read_only: bool,
}

impl MathBlockState {
    /// Create block state from previously saved data, if any.
    ///
    /// Without data the block starts with an empty expression. Data that is
    /// present but lacks `content` is kept as-is.
    pub fn new(data: Option<MathData>, read_only: bool) -> Self {
        Self {
            data: data.unwrap_or_else(|| MathData::new("")),
            read_only,
        }
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Current expression, empty if unset.
    pub fn content(&self) -> &str {
        self.data.content.as_deref().unwrap_or_default()
    }

    /// Mirror the widget's value after an input event.
    pub fn set_content(&mut self, value: String) {
        tracing::trace!(len = value.len(), "math block input");
        self.data.content = Some(value);
    }

    /// Data for the host's save cycle.
    pub fn save(&self) -> MathData {
        tracing::trace!(content = self.content(), "saving math block");
        MathData::new(self.content())
    }

    /// Saved data passes iff it carries an expression, even an empty one.
    pub fn validate(saved: &MathData) -> bool {
        tracing::trace!(?saved, "validating math block");
        saved.content.is_some()
    }
}

/// Whether a keydown inside the widget must be kept from the host editor.
///
/// Arrow keys would move the host's block caret and `/` opens its command
/// menu; either steals focus from an active math edit.
pub fn captures_key(key: &str, code: &str) -> bool {
    matches!(key, "ArrowLeft" | "ArrowRight" | "/") || code == "Slash"
}
