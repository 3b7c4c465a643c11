//! Union-find (disjoint set union) used for connectivity analysis.
//!
//! Nodes are addressed by dense indices `0..n`; callers map sparse node
//! identifiers onto that range before merging.

/// Disjoint sets over `0..n` that keep a running count of components.
#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the representative of `node`, pointing every visited node at
    /// its grandparent on the way up.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        loop {
            let parent = self.parent[node];
            if parent == node {
                return node;
            }
            let grandparent = self.parent[parent];
            self.parent[node] = grandparent;
            node = grandparent;
        }
    }

    /// Merges the sets holding `left` and `right`, attaching the smaller
    /// tree below the larger. Returns `true` when a merge happened, which
    /// is exactly when the component count drops by one.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let (left, right) = (self.find(left), self.find(right));
        if left == right {
            return false;
        }
        let (root, child) = if self.size[left] >= self.size[right] {
            (left, right)
        } else {
            (right, left)
        };
        self.parent[child] = root;
        self.size[root] = self.size[root].saturating_add(self.size[child]);
        self.components = self.components.saturating_sub(1);
        true
    }

    pub(crate) const fn component_count(&self) -> usize {
        self.components
    }
}
