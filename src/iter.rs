//! Breadth-first iteration over the contents of a [`KdTree`]
use std::collections::VecDeque;

use az::{Az, Cast};

use crate::kdtree::{Axis, KdTree};
use crate::traits::Index;

/// Iterator over the `(point, item)` pairs of a [`KdTree`], in breadth-first order.
///
/// Created by [`KdTree::iter`]. Uses an explicit queue rather than recursion, so
/// arbitrarily deep (unbalanced) trees can be walked safely.
#[derive(Debug)]
pub struct TreeIter<'a, A, T, IDX> {
    tree: &'a KdTree<A, T, IDX>,
    queue: VecDeque<IDX>,
}

impl<'a, A: Axis, T, IDX: Index> TreeIter<'a, A, T, IDX>
where
    usize: Cast<IDX>,
{
    pub(crate) fn new(tree: &'a KdTree<A, T, IDX>) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(tree.root());

        Self { tree, queue }
    }
}

impl<'a, A: Axis, T, IDX: Index> Iterator for TreeIter<'a, A, T, IDX>
where
    usize: Cast<IDX>,
{
    type Item = (&'a [A], &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.queue.pop_front()?;
        let tree = self.tree;
        let node = &tree.nodes[idx.az::<usize>()];

        self.queue.extend(node.left);
        self.queue.extend(node.right);

        Some((node.point.as_slice(), &node.item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.tree.size()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::kdtree::KdTree;

    #[test]
    fn can_iterate() {
        let mut t: KdTree<f64, i32, u16> = KdTree::new(3).unwrap();
        let expected: HashMap<_, _> = vec![
            (10, vec![1.0, 2.0, 3.0]),
            (12, vec![10.0, 2.0, 3.0]),
            (15, vec![1.0, 20.0, 3.0]),
        ]
        .into_iter()
        .collect();

        for (k, v) in expected.iter() {
            t.add(v, *k).unwrap();
        }
        let actual: HashMap<_, _> = t.iter().map(|(p, k)| (*k, p.to_vec())).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn iterates_breadth_first() {
        let mut t: KdTree<f64, char> = KdTree::new(2).unwrap();

        let content_to_add = [
            ([5.0, 5.0], 'a'), // root
            ([2.0, 8.0], 'b'), // left of a
            ([1.0, 1.0], 'c'), // left of b
            ([9.0, 1.0], 'd'), // right of a
            ([7.0, 9.0], 'e'), // right of d
        ];
        for (p, c) in content_to_add {
            t.add(&p, c).unwrap();
        }

        let order: String = t.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, "abdce");
    }

    #[test]
    fn iterating_an_empty_tree_yields_nothing() {
        let t: KdTree<f32, u8> = KdTree::new(3).unwrap();

        assert_eq!(t.iter().count(), 0);
    }
}
