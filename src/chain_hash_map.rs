//! ChainHashMap: public map surface over the structural chain table.

use crate::chain_table::{ChainTable, Iter, IterMut, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_LOAD_FACTOR};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::ops::Index;
use std::collections::hash_map::RandomState;

/// Read-miss error for the checked indexed accessors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyNotFound;

/// Hash map with separate chaining, owned collision chains, and doubling
/// growth driven by a fixed maximum load factor.
pub struct ChainHashMap<K, V, S = RandomState> {
    table: ChainTable<K, V, S>,
}

impl<K, V> ChainHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Eight buckets and a maximum load factor of 1.0.
    pub fn new() -> Self {
        Self::with_load_factor(DEFAULT_BUCKET_COUNT, DEFAULT_MAX_LOAD_FACTOR)
    }

    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_load_factor(bucket_count, DEFAULT_MAX_LOAD_FACTOR)
    }

    /// Full configuration with the default hasher. `bucket_count` is
    /// clamped to at least one; `max_load_factor` must be positive and
    /// finite and is fixed for the life of the map.
    pub fn with_load_factor(bucket_count: usize, max_load_factor: f64) -> Self {
        Self {
            table: ChainTable::new(bucket_count, max_load_factor),
        }
    }
}

impl<K, V> Default for ChainHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_parts(DEFAULT_BUCKET_COUNT, DEFAULT_MAX_LOAD_FACTOR, hasher)
    }

    pub fn with_parts(bucket_count: usize, max_load_factor: f64, hasher: S) -> Self {
        Self {
            table: ChainTable::with_hasher(bucket_count, max_load_factor, hasher),
        }
    }

    /// Insert or overwrite; returns the replaced value when `key` was
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.table.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.contains(key)
    }

    /// Remove `key`'s entry and return its value; `None` (and no other
    /// effect) when absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.remove(key)
    }

    /// Checked indexed read: the value for `key`, or `KeyNotFound`. This
    /// accessor is the only error-raising surface of the map.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(key).ok_or(KeyNotFound)
    }

    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find_mut(key).ok_or(KeyNotFound)
    }

    /// The slot for `key`, inserting `default()` when absent. The closure
    /// runs only on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.table.find_or_insert_with(key, default)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every entry; the bucket array keeps its length.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    pub fn max_load_factor(&self) -> f64 {
        self.table.max_load_factor()
    }

    /// Current bucket array length; doubles when an insert would push the
    /// load factor past the maximum.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.table.iter_mut()
    }
}

impl<K, Q, V, S> Index<&Q> for ChainHashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = V;

    /// Read sugar over `get`; panics when the key is absent. `at` reports
    /// the same condition as a `Result`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found")
    }
}
