//! Arena-backed rooted trees and the Cartesian tree builder.
//!
//! Traversals are iterative throughout, so paths with millions of nodes are
//! fine.

mod cartesian;
mod error;
mod snapshot;
mod tree;

pub use cartesian::CartesianTree;
pub use error::TreeError;
pub use snapshot::{NodeMap, TreeSnapshot};
pub use tree::{NodeId, Tree};

#[cfg(test)]
mod tests {
    use super::{Tree, TreeError};

    /// Root 33 with children 84 and 58; 93 under 84; 62 under 58; 64 and 63
    /// under 62; 83 under 63.
    fn sample() -> (Tree<u32>, Vec<super::NodeId>) {
        let mut t = Tree::new();
        let r = t.add_root(33).unwrap();
        let c = t.add_child(r, 84).unwrap();
        let d = t.add_child(r, 58).unwrap();
        let e = t.add_child(c, 93).unwrap();
        let f = t.add_child(d, 62).unwrap();
        let g = t.add_child(f, 64).unwrap();
        let h = t.add_child(f, 63).unwrap();
        let i = t.add_child(h, 83).unwrap();
        (t, vec![r, c, d, e, f, g, h, i])
    }

    #[test]
    fn accessors_after_reindex() {
        let (mut t, ids) = sample();
        assert_eq!(t.depth(ids[0]), Err(TreeError::NotIndexed));
        let snapshot = t.reindex().unwrap();
        assert_eq!(snapshot.len(), 8);

        assert_eq!(t.root(), Some(ids[0]));
        assert_eq!(t.value(ids[7]), Ok(&83));
        assert_eq!(t.parent(ids[7]), Ok(Some(ids[6])));
        assert_eq!(t.parent(ids[0]), Ok(None));
        assert_eq!(t.depth(ids[7]), Ok(4));
        assert_eq!(t.height(ids[0]), Ok(4));
        assert_eq!(t.height(ids[1]), Ok(1));
        assert_eq!(t.is_leaf(ids[5]), Ok(true));
        assert_eq!(t.is_root(ids[0]), Ok(true));
        assert_eq!(t.index(ids[0]), Ok(0));

        let kids: Vec<u32> = t
            .children(ids[4])
            .unwrap()
            .map(|c| *t.value(c).unwrap())
            .collect();
        assert_eq!(kids, vec![64, 63]);

        // preorder: 33 84 93 58 62 64 63 83
        let order: Vec<u32> = (0..8)
            .map(|i| *t.value(t.snapshot().unwrap().node(i)).unwrap())
            .collect();
        assert_eq!(order, vec![33, 84, 93, 58, 62, 64, 63, 83]);
        let snapshot = t.snapshot().unwrap();
        assert_eq!(snapshot.subtree_size(3), 5);
        assert_eq!(snapshot.parent(5), Some(4));
        assert_eq!(snapshot.children(4), &[5, 6]);
    }

    #[test]
    fn handles_are_bound_to_their_tree() {
        let (mut a, ids) = sample();
        let (mut b, _) = sample();
        a.reindex().unwrap();
        b.reindex().unwrap();
        assert_eq!(b.parent(ids[3]), Err(TreeError::ForeignNode));
        assert_eq!(b.index(ids[3]), Err(TreeError::ForeignNode));
        assert_eq!(b.snapshot().unwrap().index_of(ids[0]), Err(TreeError::ForeignNode));
    }

    #[test]
    fn removed_slots_are_retired() {
        let (mut t, ids) = sample();
        assert_eq!(t.remove_leaf(ids[4]), Err(TreeError::HasChildren));
        assert_eq!(t.remove_leaf(ids[3]), Ok(93));
        assert_eq!(t.value(ids[3]), Err(TreeError::StaleNode));

        let fresh = t.add_child(ids[1], 94).unwrap();
        assert_ne!(fresh, ids[3]);
        assert_eq!(t.value(ids[3]), Err(TreeError::StaleNode));
        assert_eq!(t.value(fresh), Ok(&94));

        let snapshot = t.reindex().unwrap();
        assert_eq!(snapshot.index_of(ids[3]), Err(TreeError::StaleNode));
        assert_eq!(snapshot.index_of(fresh), Ok(2));
    }

    #[test]
    fn mutation_invalidates_snapshot() {
        let (mut t, ids) = sample();
        t.reindex().unwrap();
        t.add_child(ids[0], 1).unwrap();
        assert_eq!(t.snapshot().unwrap_err(), TreeError::NotIndexed);
        assert_eq!(t.reindex().unwrap().len(), 9);
    }

    #[test]
    fn insert_parent_keeps_child_position() {
        let (mut t, ids) = sample();
        let mid = t.insert_parent(ids[5], 70).unwrap();
        let kids: Vec<_> = t.children(ids[4]).unwrap().collect();
        assert_eq!(kids, vec![mid, ids[6]]);
        assert_eq!(t.parent(ids[5]), Ok(Some(mid)));

        let top = t.insert_parent(ids[0], 1).unwrap();
        assert_eq!(t.root(), Some(top));
        t.reindex().unwrap();
        assert_eq!(t.depth(ids[5]), Ok(5));
        assert_eq!(t.add_root(5), Err(TreeError::RootExists));
    }

    #[test]
    fn from_parents_validates() {
        assert_eq!(Tree::from_parents(&[]).unwrap_err(), TreeError::Empty);
        assert_eq!(
            Tree::from_parents(&[None, None]).unwrap_err(),
            TreeError::MultipleRoots
        );
        assert_eq!(
            Tree::from_parents(&[None, Some(5)]).unwrap_err(),
            TreeError::InvalidParent { node: 1 }
        );
        assert_eq!(
            Tree::from_parents(&[None, Some(2), Some(1)]).unwrap_err(),
            TreeError::Unreachable { reached: 1, len: 3 }
        );

        let t = Tree::from_parents(&[Some(2), None, Some(1), Some(1)]).unwrap();
        let snapshot = t.snapshot().unwrap();
        let values: Vec<usize> = (0..4).map(|i| *t.value(snapshot.node(i)).unwrap()).collect();
        assert_eq!(values, vec![1, 2, 0, 3]);
        assert_eq!(snapshot.depth(2), 2);
    }

    #[test]
    fn deep_path_reindexes_iteratively() {
        let n: usize = 1_000_000;
        let parents: Vec<Option<usize>> = (0..n).map(|i| i.checked_sub(1)).collect();
        let t = Tree::from_parents(&parents).unwrap();
        let snapshot = t.snapshot().unwrap();
        assert_eq!(snapshot.depth(n - 1), n - 1);
        assert_eq!(snapshot.height(0), n - 1);
    }
}
