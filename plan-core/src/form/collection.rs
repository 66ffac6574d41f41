//! Ordered, variable-length lists of form sub-entities.

use std::fmt;

use tracing::debug;

/// A record whose text fields can be addressed individually.
pub trait FormRecord: Clone + Default {
    type Field: Copy + fmt::Debug;

    fn field(
        &self,
        field: Self::Field,
    ) -> &str;

    fn set_field(
        &mut self,
        field: Self::Field,
        value: String,
    );
}

/// What [`EntityCollection::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// An ordered list of sub-entities edited by position.
///
/// Out-of-range positions are a no-op for every positional mutation: nothing
/// changes, the call reports it (`None` / `false`) and logs at debug level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `item` at the tail and returns its position.
    pub fn add(
        &mut self,
        item: T,
    ) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Removes the item at `index`; later items shift down by one.
    pub fn remove_at(
        &mut self,
        index: usize,
    ) -> Option<T> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "remove_at out of bounds, ignored");
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Replaces the whole item at `index`.
    pub fn set_at(
        &mut self,
        index: usize,
        item: T,
    ) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => {
                debug!(index, len = self.items.len(), "set_at out of bounds, ignored");
                false
            }
        }
    }
}

impl<T: Default> EntityCollection<T> {
    /// Appends a blank item and returns its position.
    pub fn add_default(&mut self) -> usize {
        self.add(T::default())
    }
}

impl<T: FormRecord> EntityCollection<T> {
    /// Replaces exactly one field of the item at `index`.
    pub fn update_field(
        &mut self,
        index: usize,
        field: T::Field,
        value: impl Into<String>,
    ) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.set_field(field, value.into());
                true
            }
            None => {
                debug!(index, ?field, len = self.items.len(), "update_field out of bounds, ignored");
                false
            }
        }
    }
}

impl<T: PartialEq> EntityCollection<T> {
    pub fn contains(
        &self,
        value: &T,
    ) -> bool {
        self.items.contains(value)
    }

    /// Membership toggle: removes the first item equal to `value`, or appends
    /// `value` when no such item exists.
    pub fn toggle(
        &mut self,
        value: T,
    ) -> Toggled {
        match self.items.iter().position(|item| *item == value) {
            Some(index) => {
                self.items.remove(index);
                Toggled::Removed
            }
            None => {
                self.items.push(value);
                Toggled::Added
            }
        }
    }
}

impl<T> From<Vec<T>> for EntityCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for EntityCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
