/// A key-value pair stored by the tree maps.
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
