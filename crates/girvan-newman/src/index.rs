use std::fmt::{Debug, Display, Formatter};

/// Node identifier.
///
/// Nodes of an [AdjacencyMatrix](crate::AdjacencyMatrix) are indexed `0..n`. The index is stored
/// as a `u32`, which bounds the supported graph size well above what the O(n²) algorithms in this
/// crate can handle in practice.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Create new index from `usize`.
    #[inline(always)]
    pub fn new(x: usize) -> Self {
        debug_assert!(x < u32::MAX as usize);
        Self(x as u32)
    }

    /// Returns the index as `usize`.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    #[inline(always)]
    fn from(x: usize) -> Self {
        Self::new(x)
    }
}

impl From<u32> for NodeIndex {
    #[inline(always)]
    fn from(x: u32) -> Self {
        Self(x)
    }
}

impl From<NodeIndex> for usize {
    #[inline(always)]
    fn from(x: NodeIndex) -> Self {
        x.index()
    }
}

impl Debug for NodeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeIndex").field(&self.0).finish()
    }
}

impl Display for NodeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
