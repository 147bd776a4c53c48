// src/graph/union_find.rs
//! Disjoint-set forest over dense vertex indices.

/// Union-find with path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Creates `size` singleton sets.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    /// Representative of the set containing `x`.
    #[allow(clippy::indexing_slicing)] // Guarded: parent entries are always valid indices
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`.
    /// Returns `false` when they were already the same set.
    #[allow(clippy::indexing_slicing)]
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_find() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(0, 2), "already joined");
        assert_eq!(sets.find(2), sets.find(0));
        assert_ne!(sets.find(3), sets.find(0));
        assert!(sets.union(3, 4));
        assert!(sets.union(4, 0));
        assert_eq!(sets.find(3), sets.find(2));
    }

    #[test]
    fn test_find_compresses_paths() {
        let mut sets = DisjointSet::new(4);
        sets.union(2, 3);
        sets.union(1, 2);
        sets.union(0, 1);
        let root = sets.find(3);
        assert_eq!(sets.parent[3], root);
    }
}
