use std::borrow::Borrow;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

use crate::entry::Entry;
use crate::error::Result;
use crate::iter::{IntoIter, Iter, IterMut, LevelOrder, PostOrder, PreOrder};
use crate::tree::{self, Node, NoRebalance, Tree};

/// An ordered map implemented using an unbalanced binary search tree.
///
/// The tree keeps the shape the insertion order builds: keys descend left when
/// smaller and right when greater, and no restructuring happens afterwards.
/// Operations run in time proportional to the height of the tree, which is
/// logarithmic for random insertion orders but linear for sorted ones; the
/// [`AvlMap`] variant rebalances to guarantee a logarithmic height instead.
/// Keys are unique; inserting a key that is already present is rejected and
/// leaves the map unchanged.
///
/// [`AvlMap`]: crate::avl_tree::AvlMap
///
/// # Examples
///
/// ```
/// use tree_collections::bst::BstMap;
///
/// let mut map = BstMap::new();
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
pub struct BstMap<T, U> {
    tree: Tree<T, U>,
    len: usize,
}

impl<T, U> BstMap<T, U> {
    /// Constructs a new, empty `BstMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// ```
    pub fn new() -> Self {
        BstMap { tree: None, len: 0 }
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
    /// use tree_collections::bst::BstMap;
    /// use tree_collections::Error;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(1, 1), Ok(()));
    /// assert_eq!(map.insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Result<()>
    where
        T: Ord,
    {
        tree::insert::<NoRebalance, T, U>(&mut self.tree, Node::new(key, value))?;
        self.len += 1;
        Ok(())
    }

    /// Removes a key-value pair from the map, returning the pair if the key
    /// was present and [`Error::KeyNotFound`] otherwise. A failed removal
    /// leaves the map unchanged. When the removed node has two children, the
    /// minimum of its right subtree, the removed key's in-order successor,
    /// takes its position.
    ///
    /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstMap;
    /// use tree_collections::Error;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.remove(&1), Ok((1, 1)));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let Entry { key, value } = tree::remove::<NoRebalance, T, U, V>(&mut self.tree, key)?;
        self.len -= 1;
        Ok((key, value))
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf. An empty map has height 0. The height is computed by walking the
    /// tree, so this runs in time linear in the number of entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// for key in 1..4 {
    ///     map.insert(key, ()).unwrap();
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::computed_height(&self.tree)
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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
    /// use tree_collections::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
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

impl<T, U> IntoIterator for BstMap<T, U> {
    type IntoIter = IntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, U> IntoIterator for &'a BstMap<T, U>
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

impl<'a, T, U> IntoIterator for &'a mut BstMap<T, U>
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

impl<T, U> Default for BstMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
