//! Recursive structural comparison of JSON values.

use serde_json::Value;

use crate::node::{DiffNode, DiffStatus, ValueKind};

/// Compare two JSON values and return the classified node tree.
///
/// The observer fires once, in visit order, for every added, removed, or
/// changed key. A changed key literally named `"key"` is tagged
/// [`DiffStatus::ChangedKey`] and suppressed from notification. The walk is
/// deterministic and terminates on acyclic input; cyclic input is out of
/// contract.
///
/// # Examples
/// ```
/// use msinm_diff::{DiffStatus, compare};
/// use serde_json::json;
///
/// let mut changed = Vec::new();
/// compare(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 3}), &mut |node| {
///     changed.push((node.key.clone(), node.status));
/// });
/// assert_eq!(changed, vec![(String::from("b"), DiffStatus::Changed)]);
/// ```
pub fn compare<F>(left: &Value, right: &Value, observer: &mut F) -> DiffNode
where
    F: FnMut(&DiffNode),
{
    visit(String::new(), Some(left), Some(right), observer)
}

fn visit<F>(
    key: String,
    left: Option<&Value>,
    right: Option<&Value>,
    observer: &mut F,
) -> DiffNode
where
    F: FnMut(&DiffNode),
{
    let node = match (left, right) {
        (Some(a), Some(b)) => visit_present(key, a, b, observer),
        (Some(a), None) => DiffNode::leaf(key, DiffStatus::Removed, Some(a), None),
        (None, Some(b)) => DiffNode::leaf(key, DiffStatus::Added, None, Some(b)),
        // Keys come from the union of both sides, so one side is present.
        (None, None) => DiffNode::leaf(key, DiffStatus::Unchanged, None, None),
    };
    if node.status.notifies() {
        observer(&node);
    }
    node
}

fn visit_present<F>(key: String, left: &Value, right: &Value, observer: &mut F) -> DiffNode
where
    F: FnMut(&DiffNode),
{
    let left_kind = ValueKind::of(left);
    let right_kind = ValueKind::of(right);

    let differs = left_kind != right_kind || (!left_kind.is_composite() && left != right);
    if differs {
        let status = if key == "key" {
            DiffStatus::ChangedKey
        } else {
            DiffStatus::Changed
        };
        return DiffNode::leaf(key, status, Some(left), Some(right));
    }

    if left_kind.is_composite() {
        let children = merged_keys(left, right)
            .into_iter()
            .map(|child_key| {
                let left_child = member(left, &child_key);
                let right_child = member(right, &child_key);
                visit(child_key, left_child, right_child, observer)
            })
            .collect();
        return DiffNode::composite(key, left_kind, children);
    }

    DiffNode::leaf(key, DiffStatus::Unchanged, Some(left), Some(right))
}

/// Union of both sides' keys, sorted lexicographically with duplicate
/// consecutive entries skipped. Array indices take part as strings, so an
/// index of 10 sorts before 2.
fn merged_keys(left: &Value, right: &Value) -> Vec<String> {
    let mut keys = own_keys(left);
    keys.extend(own_keys(right));
    keys.sort();
    keys.dedup();
    keys
}

fn own_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|index| index.to_string()).collect(),
        _ => Vec::new(),
    }
}

fn member<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn notifications(left: &Value, right: &Value) -> Vec<(String, DiffStatus)> {
        let mut seen = Vec::new();
        compare(left, right, &mut |node| {
            seen.push((node.key.clone(), node.status));
        });
        seen
    }

    #[rstest]
    fn changed_scalar_notifies_once() {
        let seen = notifications(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 3}));
        assert_eq!(seen, vec![(String::from("b"), DiffStatus::Changed)]);
    }

    #[rstest]
    fn added_key_notifies_as_added() {
        let seen = notifications(&json!({"a": 1}), &json!({"a": 1, "b": 2}));
        assert_eq!(seen, vec![(String::from("b"), DiffStatus::Added)]);
    }

    #[rstest]
    fn removed_key_notifies_as_removed() {
        let seen = notifications(&json!({"a": 1, "b": 2}), &json!({"a": 1}));
        assert_eq!(seen, vec![(String::from("b"), DiffStatus::Removed)]);
    }

    #[rstest]
    fn equal_objects_notify_nothing() {
        assert!(notifications(&json!({}), &json!({})).is_empty());
        assert!(notifications(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})).is_empty());
    }

    #[rstest]
    fn kind_mismatch_is_a_single_change() {
        let seen = notifications(&json!({"a": [1]}), &json!({"a": {"0": 1}}));
        assert_eq!(seen, vec![(String::from("a"), DiffStatus::Changed)]);
    }

    #[rstest]
    fn nested_changes_surface_from_deep_keys() {
        let seen = notifications(
            &json!({"msg": {"title": "Firing", "areas": [{"id": 1}]}}),
            &json!({"msg": {"title": "Firing exercise", "areas": [{"id": 2}]}}),
        );
        assert_eq!(
            seen,
            vec![
                (String::from("id"), DiffStatus::Changed),
                (String::from("title"), DiffStatus::Changed),
            ]
        );
    }

    #[rstest]
    fn notifications_follow_sorted_key_order() {
        let seen = notifications(&json!({"b": 1, "a": 2, "c": 3}), &json!({}));
        let keys: Vec<&str> = seen.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn array_indices_sort_lexicographically() {
        let left = json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let seen = notifications(&left, &json!([]));
        let keys: Vec<&str> = seen.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["0", "1", "10", "2", "3", "4", "5", "6", "7", "8", "9"]
        );
    }

    #[rstest]
    fn changed_key_named_key_is_tagged_but_not_notified() {
        let left = json!({"key": "old", "name": "x"});
        let right = json!({"key": "new", "name": "y"});
        let mut seen = Vec::new();
        let root = compare(&left, &right, &mut |node| {
            seen.push(node.key.clone());
        });
        assert_eq!(seen, vec![String::from("name")]);
        let key_node = root
            .children
            .iter()
            .find(|child| child.key == "key")
            .expect("key node present");
        assert_eq!(key_node.status, DiffStatus::ChangedKey);
    }

    #[rstest]
    fn leaves_carry_values_and_kinds() {
        let root = compare(&json!({"a": 1}), &json!({"a": "1"}), &mut |_| {});
        let leaf = root.children.first().expect("one child");
        assert_eq!(leaf.left, Some(json!(1)));
        assert_eq!(leaf.right, Some(json!("1")));
        assert_eq!(leaf.left_kind, Some(ValueKind::Number));
        assert_eq!(leaf.right_kind, Some(ValueKind::String));
    }

    #[rstest]
    fn scalar_roots_compare_directly() {
        let seen = notifications(&json!(1), &json!(2));
        assert_eq!(seen, vec![(String::new(), DiffStatus::Changed)]);
        assert!(notifications(&json!("x"), &json!("x")).is_empty());
    }

    #[rstest]
    fn number_equality_is_strict() {
        // 1 and 1.0 classify as numbers on both sides but compare unequal.
        let seen = notifications(&json!({"n": 1}), &json!({"n": 1.0}));
        assert_eq!(seen, vec![(String::from("n"), DiffStatus::Changed)]);
    }

    #[rstest]
    fn unchanged_children_stay_in_the_tree() {
        let root = compare(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 3}), &mut |_| {});
        assert_eq!(root.children.len(), 2);
        let a = root.children.first().expect("a node");
        assert_eq!(a.status, DiffStatus::Unchanged);
    }
}
