//! Classified nodes produced by the structural comparison.

use serde_json::Value;

/// The closed set of JSON value kinds the comparison distinguishes.
///
/// # Examples
/// ```
/// use msinm_diff::ValueKind;
/// use serde_json::json;
///
/// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Array);
/// assert_eq!(ValueKind::of(&json!(null)).as_str(), "null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// JSON booleans.
    Bool,
    /// JSON numbers.
    Number,
    /// JSON strings.
    String,
    /// JSON sequences.
    Array,
    /// JSON mappings.
    Object,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase kind name shown next to leaf values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether the kind has child keys to recurse into.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one compared key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    /// Present only on the right side.
    Added,
    /// Present only on the left side.
    Removed,
    /// Present on both sides with different kinds or scalar values.
    Changed,
    /// A changed key literally named `"key"`; tagged but never notified.
    ChangedKey,
    /// Equal on both sides.
    Unchanged,
}

impl DiffStatus {
    /// Tag text shown in rendered reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::ChangedKey => "changed key",
            Self::Unchanged => "unchanged",
        }
    }

    /// Whether nodes with this status reach the observer.
    pub fn notifies(self) -> bool {
        matches!(self, Self::Added | Self::Removed | Self::Changed)
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key of a compared pair of JSON values.
///
/// Leaves carry the two raw values and their kinds; composite nodes carry
/// their children in key order instead. The root of a comparison is a node
/// with an empty key.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffNode {
    /// Key name, or the stringified index for array elements.
    pub key: String,
    /// Classification of this key.
    pub status: DiffStatus,
    /// Raw left-side value for leaves; `None` for added keys and composites.
    pub left: Option<Value>,
    /// Raw right-side value for leaves; `None` for removed keys and
    /// composites.
    pub right: Option<Value>,
    /// Kind of the left value where one was present.
    pub left_kind: Option<ValueKind>,
    /// Kind of the right value where one was present.
    pub right_kind: Option<ValueKind>,
    /// Children of a composite node, in merged key order.
    pub children: Vec<DiffNode>,
}

impl DiffNode {
    pub(crate) fn leaf(
        key: String,
        status: DiffStatus,
        left: Option<&Value>,
        right: Option<&Value>,
    ) -> Self {
        Self {
            key,
            status,
            left_kind: left.map(ValueKind::of),
            right_kind: right.map(ValueKind::of),
            left: left.cloned(),
            right: right.cloned(),
            children: Vec::new(),
        }
    }

    pub(crate) fn composite(key: String, kind: ValueKind, children: Vec<Self>) -> Self {
        Self {
            key,
            status: DiffStatus::Unchanged,
            left: None,
            right: None,
            left_kind: Some(kind),
            right_kind: Some(kind),
            children,
        }
    }
}
