// Complete binary tree in heap layout. Node 1 is the root, node k has children
// 2k and 2k + 1, and leaf i lives at size + i. Slot 0 is never read.

#[derive(Debug, Clone)]
pub struct Tree<V> {
    nodes: Vec<V>,
    size: usize,
}

impl<V: Copy> Tree<V> {
    // assumes capacity > 0
    pub fn new(value: V, capacity: usize) -> Self {
        let size = capacity.next_power_of_two();
        Self {
            nodes: vec![value; 2 * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn depth(&self) -> usize {
        self.size.trailing_zeros() as usize + 1
    }

    pub fn root(&self) -> usize {
        1
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node <= self.root() {
            None
        } else {
            Some(node / 2)
        }
    }

    pub fn children(&self, node: usize) -> Option<(usize, usize)> {
        if self.is_leaf(node) {
            None
        } else {
            Some((2 * node, 2 * node + 1))
        }
    }

    pub fn is_leaf(&self, node: usize) -> bool {
        node >= self.size
    }

    pub fn leaf(&self, index: usize) -> usize {
        self.size + index
    }

    pub fn value(&self, node: usize) -> V {
        self.nodes[node]
    }

    pub fn set_value(&mut self, node: usize, value: V) {
        self.nodes[node] = value;
    }

    pub fn leaves(&self, capacity: usize) -> &[V] {
        &self.nodes[self.size..self.size + capacity]
    }

    pub fn leaves_mut(&mut self, capacity: usize) -> &mut [V] {
        let size = self.size;
        &mut self.nodes[size..size + capacity]
    }

    // whole heap array, used by the level-by-level descent
    pub fn nodes(&self) -> &[V] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_pads_to_power_of_two() {
        let tree = Tree::new(0.0, 14);
        assert_eq!(tree.size(), 16);
        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.nodes().len(), 32);
        assert_eq!(tree.leaf(0), 16);
        assert_eq!(tree.leaves(14).len(), 14);
    }

    #[test]
    fn single_leaf_tree_is_its_own_root() {
        let tree = Tree::new(0.0, 1);
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf(0), tree.root());
        assert!(tree.is_leaf(tree.root()));
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn navigation() {
        let tree = Tree::new(0.0, 8);
        assert_eq!(tree.children(1), Some((2, 3)));
        assert_eq!(tree.children(8), None);
        assert_eq!(tree.parent(9), Some(4));
        assert_eq!(tree.parent(1), None);
    }
}
