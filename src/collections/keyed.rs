//! `KeyedCollection`: an ordered container of items that carry their own key.
//!
//! Items are stored in a `BTreeMap` keyed by [`Keyed::key`], so iteration
//! follows key order and is deterministic across runs.
//!
//! Contract:
//! - `try_insert` rejects an item whose key is already present and hands the
//!   item back to the caller.
//! - `get` / `remove` return `None` when nothing matches.
//! - `remove_where` removes at most one item: the first match in key order.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `try_insert` | \(O(\log n)\) | |
//! | `get` / `remove` | \(O(\log n)\) | |
//! | `remove_where` | \(O(n)\) | Scans until the first match |

use std::collections::btree_map::{self, BTreeMap, Entry};

/// An item that exposes the key it is stored under.
pub trait Keyed {
    /// The key type. Must be totally ordered and cheap to copy.
    type Key: Ord + Copy;

    /// Returns the key of this item. Must not change while stored.
    fn key(&self) -> Self::Key;
}

/// An ordered collection of [`Keyed`] items with unique keys.
#[derive(Debug, Clone)]
pub struct KeyedCollection<T: Keyed> {
    items: BTreeMap<T::Key, T>,
}

impl<T: Keyed> KeyedCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts `item`, failing if its key is already present.
    ///
    /// # Errors
    /// Returns the rejected item when an item with the same key exists.
    pub fn try_insert(&mut self, item: T) -> Result<&mut T, T> {
        match self.items.entry(item.key()) {
            Entry::Occupied(_) => Err(item),
            Entry::Vacant(slot) => Ok(slot.insert(item)),
        }
    }

    /// Returns `true` if an item is stored under `key`.
    pub fn contains(&self, key: &T::Key) -> bool {
        self.items.contains_key(key)
    }

    /// Returns the item stored under `key`.
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.get(key)
    }

    /// Returns the item stored under `key` mutably.
    pub fn get_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        self.items.get_mut(key)
    }

    /// Removes and returns the item stored under `key`.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        self.items.remove(key)
    }

    /// Removes and returns the item equal in key to `item`.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        self.items.remove(&item.key())
    }

    /// Removes the first item (in key order) satisfying `predicate`.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let key = self
            .items
            .values()
            .find(|item| predicate(*item))
            .map(Keyed::key)?;
        self.items.remove(&key)
    }

    /// Returns the first item (in key order) satisfying `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.values().find(|item| predicate(*item))
    }

    /// Keeps only the items satisfying `predicate`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(|_, item| predicate(item));
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates items in key order.
    pub fn iter(&self) -> btree_map::Values<'_, T::Key, T> {
        self.items.values()
    }

    /// Iterates items mutably in key order.
    pub fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, T::Key, T> {
        self.items.values_mut()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, T::Key, T> {
        self.items.keys()
    }

    /// Removes all items, yielding them in key order.
    pub fn drain(&mut self) -> btree_map::IntoValues<T::Key, T> {
        core::mem::take(&mut self.items).into_values()
    }
}

impl<T: Keyed> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a KeyedCollection<T> {
    type Item = &'a T;
    type IntoIter = btree_map::Values<'a, T::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Keyed> IntoIterator for KeyedCollection<T> {
    type Item = T;
    type IntoIter = btree_map::IntoValues<T::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl<T: Keyed> FromIterator<T> for KeyedCollection<T> {
    /// Collects items. The first item per key wins; later duplicates are
    /// dropped rather than reported. Use [`KeyedCollection::try_insert`] to
    /// observe rejections.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            let _ = collection.try_insert(item);
        }
        collection
    }
}
