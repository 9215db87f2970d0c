use crate::error::Result;
use crate::iter::{SetIntoIter, SetIter};

use super::map::BstMap;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// The tree keeps the shape the insertion order builds, so operations run in
/// time proportional to the height of the tree. The [`AvlSet`] variant
/// rebalances to guarantee a logarithmic height instead.
///
/// [`AvlSet`]: crate::avl_tree::AvlSet
///
/// # Examples
///
/// ```
/// use tree_collections::bst::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(0).unwrap();
/// set.insert(3).unwrap();
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Ok(0));
/// assert!(set.remove(&1).is_err());
/// ```
pub struct BstSet<T> {
    map: BstMap<T, ()>,
}

impl<T> BstSet<T> {
    /// Constructs a new, empty `BstSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::new();
    /// ```
    pub fn new() -> Self {
        BstSet { map: BstMap::new() }
    }

    /// Inserts a key into the set. If the key already exists in the set, the
    /// insertion fails with [`Error::DuplicateKey`] and the set is unchanged.
    ///
    /// [`Error::DuplicateKey`]: crate::Error::DuplicateKey
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    /// use tree_collections::Error;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.insert(1), Ok(()));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Err(Error::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        self.map.insert(key, ())
    }

    /// Removes a key from the set, returning the key if it was present and
    /// [`Error::KeyNotFound`] otherwise.
    ///
    /// [`Error::KeyNotFound`]: crate::Error::KeyNotFound
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    /// use tree_collections::Error;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<T>
    where
        T: Ord,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular
    /// key, or `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular
    /// key, or `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set that yields keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_collections::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SetIter<T> {
        SetIter::new(self.map.iter())
    }
}

impl<T> IntoIterator for BstSet<T> {
    type IntoIter = SetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIter::new(self.map.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a,
{
    type IntoIter = SetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
