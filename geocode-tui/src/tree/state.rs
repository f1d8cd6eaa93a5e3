//! 节点展开状态

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::path::NodePath;

/// 深度小于该值的节点默认展开
pub const AUTO_EXPAND_DEPTH: usize = 2;

/// 树查看器的节点状态
///
/// Only nodes the user has toggled are stored; every other node falls back to the
/// depth rule. A fresh `TreeState` is used for every new response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    #[serde(with = "override_pairs")]
    overrides: BTreeMap<NodePath, bool>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 节点当前是否展开
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.overrides
            .get(path)
            .copied()
            .unwrap_or(path.depth() < AUTO_EXPAND_DEPTH)
    }

    /// 切换节点状态，返回切换后的状态
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let expanded = !self.is_expanded(path);
        self.set_expanded(path, expanded);
        expanded
    }

    pub fn set_expanded(&mut self, path: &NodePath, expanded: bool) {
        self.overrides.insert(path.clone(), expanded);
    }

    /// 展开 `value` 中的所有可折叠节点
    pub fn expand_all(&mut self, value: &Value) {
        self.set_all(value, true);
    }

    /// 折叠 `value` 中的所有可折叠节点（包括根）
    pub fn collapse_all(&mut self, value: &Value) {
        self.set_all(value, false);
    }

    fn set_all(&mut self, value: &Value, expanded: bool) {
        self.overrides.clear();
        let mut stack = vec![(NodePath::root(), value)];
        while let Some((path, node)) = stack.pop() {
            match node {
                Value::Array(items) if !items.is_empty() => {
                    stack.extend(
                        items
                            .iter()
                            .enumerate()
                            .map(|(i, child)| (path.child_index(i), child)),
                    );
                    self.overrides.insert(path, expanded);
                }
                Value::Object(map) if !map.is_empty() => {
                    stack.extend(map.iter().map(|(k, child)| (path.child_key(k), child)));
                    self.overrides.insert(path, expanded);
                }
                _ => {}
            }
        }
    }
}

/// `NodePath` 不是字符串，JSON 对象无法直接以其为键，序列化为 `[path, expanded]` 对
mod override_pairs {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::NodePath;

    pub fn serialize<S>(map: &BTreeMap<NodePath, bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<NodePath, bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<(NodePath, bool)>::deserialize(deserializer).map(|pairs| pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_follows_depth() {
        let state = TreeState::new();
        let root = NodePath::root();
        let child = root.child_key("b");
        let grandchild = child.child_key("c");
        assert!(state.is_expanded(&root));
        assert!(state.is_expanded(&child));
        assert!(!state.is_expanded(&grandchild));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut state = TreeState::new();
        let path = NodePath::root().child_index(0);
        assert!(!state.toggle(&path));
        assert!(!state.is_expanded(&path));
        assert!(state.toggle(&path));
        assert!(state.is_expanded(&path));
    }

    #[test]
    fn toggle_only_touches_one_node() {
        let mut state = TreeState::new();
        let a = NodePath::root().child_key("a");
        let b = NodePath::root().child_key("b");
        state.toggle(&a);
        assert!(!state.is_expanded(&a));
        assert!(state.is_expanded(&b));
    }

    #[test]
    fn expand_and_collapse_all() {
        let value = json!({"a": {"b": {"c": [1, 2]}}, "e": []});
        let deep = NodePath::root().child_key("a").child_key("b").child_key("c");

        let mut state = TreeState::new();
        state.expand_all(&value);
        assert!(state.is_expanded(&deep));

        state.collapse_all(&value);
        assert!(!state.is_expanded(&NodePath::root()));
        assert!(!state.is_expanded(&deep));
    }

    #[test]
    fn serde_round_trip() {
        let mut state = TreeState::new();
        state.toggle(&NodePath::root().child_key("results").child_index(3));
        let json = serde_json::to_string(&state).unwrap();
        let back: TreeState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
