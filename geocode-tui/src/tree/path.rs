//! 节点路径

use std::fmt;

use serde::{Deserialize, Serialize};

/// 路径中的一步
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathSegment {
    /// 数组下标
    Index(usize),
    /// 对象键
    Key(String),
}

/// 从根节点到某个节点的路径，根节点为空路径
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// 节点深度（根为 0）
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }
}

impl<const N: usize> From<[PathSegment; N]> for NodePath {
    fn from(segments: [PathSegment; N]) -> Self {
        Self(segments.into())
    }
}

/// `$`, `$.results[0].geometry` 形式，用于状态栏显示
impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Index(i) => write!(f, "[{i}]")?,
                PathSegment::Key(k) => write!(f, ".{k}")?,
            }
        }
        Ok(())
    }
}
