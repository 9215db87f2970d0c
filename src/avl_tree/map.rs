use std::borrow::Borrow;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

use crate::avl_tree::tree::AvlRebalance;
use crate::entry::Entry;
use crate::error::Result;
use crate::iter::{IntoIter, Iter, IterMut, LevelOrder, PostOrder, PreOrder};
use crate::tree::{self, Node, Tree};

/// An ordered map implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the
/// invariant that the heights of the two child subtrees of any node differ by
/// at most one, so every operation runs in time logarithmic in the number of
/// entries. Keys are unique; inserting a key that is already present is
/// rejected and leaves the map unchanged.
///
/// # Examples
///
/// ```
/// use tree_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1).unwrap();
/// map.insert(3, 4).unwrap();
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Ok((0, 2)));
/// assert!(map.remove(&1).is_err());
/// ```
pub struct AvlMap<T, U> {
    tree: Tree<T, U>,
    len: usize,
}

impl<T, U> AvlMap<T, U> {
    /// Constructs a new, empty `AvlMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in
    /// the map, the insertion fails with [`Error::DuplicateKey`], the stored
    /// value is retained, and the rejected pair is dropped.
    ///
    /// [`Error::DuplicateKey`]: crate::Error::DuplicateKey
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    /// use tree_collections::Error;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), Ok(()));
    /// assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Result<()>
    where
        T: Ord,
    {
        tree::insert::<AvlRebalance, T, U>(&mut self.tree, Node::new(key, value))?;
        self.len += 1;
        Ok(())
    }

    /// Removes a key-value pair from the map, returning the pair if the key
    /// was present and [`Error::KeyNotFound`] otherwise. A failed removal
    /// leaves the map unchanged.
    ///
    /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    /// use tree_collections::Error;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.remove(&1), Ok((1, 1)));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let Entry { key, value } = tree::remove::<AvlRebalance, T, U, V>(&mut self.tree, key)?;
        self.len -= 1;
        Ok((key, value))
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a
    /// particular key, or `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular
    /// key, or `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf. An empty map has height 0. The balance invariant keeps the
    /// height logarithmic in the number of entries regardless of insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// for key in 1..8 {
    ///     map.insert(key, ()).unwrap();
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular
    /// key, or `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular
    /// key, or `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns an iterator over the map that yields key-value pairs using
    /// in-order traversal, so keys appear in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T, U> {
        Iter::new(&self.tree)
    }

    /// Returns a mutable iterator over the map that yields key-value pairs
    /// using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<T, U> {
        IterMut::new(&mut self.tree)
    }

    /// Returns an iterator over the map that yields key-value pairs using
    /// pre-order traversal: each node before its subtrees, left before right.
    /// The first yielded pair is the root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 20).unwrap();
    /// map.insert(1, 10).unwrap();
    /// map.insert(3, 30).unwrap();
    ///
    /// let mut iterator = map.pre_order();
    /// assert_eq!(iterator.next(), Some((&2, &20)));
    /// assert_eq!(iterator.next(), Some((&1, &10)));
    /// assert_eq!(iterator.next(), Some((&3, &30)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn pre_order(&self) -> PreOrder<T, U> {
        PreOrder::new(&self.tree)
    }

    /// Returns an iterator over the map that yields key-value pairs using
    /// post-order traversal: each node after both its subtrees. The last
    /// yielded pair is the root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 20).unwrap();
    /// map.insert(1, 10).unwrap();
    /// map.insert(3, 30).unwrap();
    ///
    /// let mut iterator = map.post_order();
    /// assert_eq!(iterator.next(), Some((&1, &10)));
    /// assert_eq!(iterator.next(), Some((&3, &30)));
    /// assert_eq!(iterator.next(), Some((&2, &20)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn post_order(&self) -> PostOrder<T, U> {
        PostOrder::new(&self.tree)
    }

    /// Returns an iterator over the map that yields key-value pairs level by
    /// level, each level left to right. The first yielded pair is the root of
    /// the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 20).unwrap();
    /// map.insert(1, 10).unwrap();
    /// map.insert(3, 30).unwrap();
    ///
    /// let mut iterator = map.level_order();
    /// assert_eq!(iterator.next(), Some((&2, &20)));
    /// assert_eq!(iterator.next(), Some((&1, &10)));
    /// assert_eq!(iterator.next(), Some((&3, &30)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn level_order(&self) -> LevelOrder<T, U> {
        LevelOrder::new(&self.tree)
    }

    /// Renders the map's tree structure as a Graphviz directed graph with one
    /// vertex per key, edges to children, and point-shaped placeholder
    /// vertices for absent children.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b').unwrap();
    ///
    /// let dot = map.to_dot();
    /// assert!(dot.starts_with("digraph {"));
    /// assert!(dot.contains("2 -> nil"));
    /// ```
    pub fn to_dot(&self) -> String
    where
        T: Display,
    {
        tree::to_dot(&self.tree)
    }
}

impl<T, U> IntoIterator for AvlMap<T, U> {
    type IntoIter = IntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, U> IntoIterator for &'a AvlMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = Iter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut AvlMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = IterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, U> Default for AvlMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for AvlMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use std::cmp;

    use quickcheck::quickcheck;

    use super::AvlMap;
    use crate::error::Error;
    use crate::tree::Tree;

    fn true_height<T, U>(tree: &Tree<T, U>) -> usize {
        match tree {
            None => 0,
            Some(ref node) => cmp::max(true_height(&node.left), true_height(&node.right)) + 1,
        }
    }

    // checks the balance invariant by recomputing heights from scratch rather
    // than trusting the stored tags
    fn check_balanced<T, U>(tree: &Tree<T, U>) -> bool {
        match tree {
            None => true,
            Some(ref node) => {
                let left_height = true_height(&node.left);
                let right_height = true_height(&node.right);
                (left_height as i32 - right_height as i32).abs() <= 1
                    && node.height == cmp::max(left_height, right_height) + 1
                    && check_balanced(&node.left)
                    && check_balanced(&node.right)
            },
        }
    }

    #[test]
    fn test_len_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_height_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.height(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), Ok(()));
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), Ok(()));
        assert_eq!(map.insert(1, 3), Err(Error::DuplicateKey));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1).unwrap();
        assert_eq!(map.remove(&1), Ok((1, 1)));
        assert!(!map.contains_key(&1));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_absent() {
        let mut map = AvlMap::new();
        map.insert(1, 1).unwrap();
        assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
        assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_empty() {
        let mut map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_min_max() {
        let mut map = AvlMap::new();
        map.insert(1, 1).unwrap();
        map.insert(3, 3).unwrap();
        map.insert(5, 5).unwrap();

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 1).unwrap();
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = AvlMap::new();
        map.insert(1, 1).unwrap();
        map.insert(3, 3).unwrap();
        map.insert(5, 5).unwrap();

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_rotate_left_left() {
        let mut map = AvlMap::new();
        for key in [3, 2, 1].iter() {
            map.insert(*key, ()).unwrap();
        }

        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![2, 1, 3]);
        assert!(check_balanced(&map.tree));
    }

    #[test]
    fn test_rotate_right_right() {
        let mut map = AvlMap::new();
        for key in [1, 2, 3].iter() {
            map.insert(*key, ()).unwrap();
        }

        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![2, 1, 3]);
        assert!(check_balanced(&map.tree));
    }

    #[test]
    fn test_rotate_left_right() {
        let mut map = AvlMap::new();
        for key in [3, 1, 2].iter() {
            map.insert(*key, ()).unwrap();
        }

        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![2, 1, 3]);
        assert!(check_balanced(&map.tree));
    }

    #[test]
    fn test_rotate_right_left() {
        let mut map = AvlMap::new();
        for key in [1, 3, 2].iter() {
            map.insert(*key, ()).unwrap();
        }

        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![2, 1, 3]);
        assert!(check_balanced(&map.tree));
    }

    #[test]
    fn test_balanced_insertion_order() {
        let mut map = AvlMap::new();
        for key in [50, 30, 70, 20, 40, 60, 80].iter() {
            map.insert(*key, ()).unwrap();
        }

        assert_eq!(map.height(), 3);
        assert!(check_balanced(&map.tree));
        assert_eq!(map.level_order().next(), Some((&50, &())));

        let keys = map.iter().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_monotonic_insertion_order() {
        let mut map = AvlMap::new();
        for key in 1..8 {
            map.insert(key, ()).unwrap();
        }

        assert_eq!(map.height(), 3);
        assert!(check_balanced(&map.tree));

        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![4, 2, 1, 3, 6, 5, 7]);
    }

    #[test]
    fn test_remove_rebalances_ancestors() {
        let mut map = AvlMap::new();
        for key in [4, 2, 6, 1, 3, 5, 7].iter() {
            map.insert(*key, ()).unwrap();
        }

        map.remove(&1).unwrap();
        map.remove(&3).unwrap();
        map.remove(&2).unwrap();

        assert!(check_balanced(&map.tree));
        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![6, 4, 5, 7]);
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut map = AvlMap::new();
        for key in 1..8 {
            map.insert(key, ()).unwrap();
        }

        assert_eq!(map.remove(&4), Ok((4, ())));
        assert!(check_balanced(&map.tree));

        // the in-order successor of the removed root takes its position
        let keys = map.pre_order().map(|pair| *pair.0).collect::<Vec<u32>>();
        assert_eq!(keys, vec![5, 2, 1, 3, 6, 7]);
    }

    #[test]
    fn test_to_dot() {
        let mut map = AvlMap::new();
        map.insert(2, ()).unwrap();
        map.insert(1, ()).unwrap();
        map.insert(3, ()).unwrap();

        assert_eq!(
            map.to_dot(),
            "digraph {\n\
             \tnil0 [shape=point];\n\
             \t1 -> nil0;\n\
             \tnil1 [shape=point];\n\
             \t1 -> nil1;\n\
             \t2 -> 1;\n\
             \t2 -> 3;\n\
             \tnil2 [shape=point];\n\
             \t3 -> nil2;\n\
             \tnil3 [shape=point];\n\
             \t3 -> nil3;\n\
             }\n",
        );
    }

    quickcheck! {
        fn prop_balanced_after_operations(keys: Vec<u16>) -> bool {
            let mut map = AvlMap::new();
            for &key in &keys {
                let _ = map.insert(key, ());
            }
            if !check_balanced(&map.tree) {
                return false;
            }
            for &key in keys.iter().step_by(2) {
                let _ = map.remove(&key);
            }
            check_balanced(&map.tree)
        }
    }
}
