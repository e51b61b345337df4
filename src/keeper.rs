//! Ordered storage with a derived key index.
//!
//! Sections, params and decoded records are all looked up both in source
//! order and by name. A [`Keeper`] owns the items once and maintains the
//! name index inside the same `keep` call, so the two views cannot drift.

// other keepers use HashMap
use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::slice::Iter;
use seahash::SeaHasher;

use serde::{Serialize, Serializer};

pub type KeyHasher = BuildHasherDefault<SeaHasher>;

/// Anything that can be kept needs to tell under which key.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Debug)]
pub struct Keeper<T> {
    kept: Vec<T>,
    index: HashMap<String, Vec<usize>, KeyHasher>,
}

impl<T: Keyed> Keeper<T> {
    pub fn new() -> Self {
        Self {
            kept: Vec::new(),
            index: HashMap::<String, Vec<usize>, KeyHasher>::default(),
        }
    }
    /// Appends the item and files it under its key. This is the only way in.
    pub fn keep(&mut self, item: T) -> &T {
        let position = self.kept.len();
        self.index.entry(item.key().to_string()).or_default().push(position);
        self.kept.push(item);
        &self.kept[position]
    }
    /// All items kept under `key`, in the order they were kept.
    pub fn lookup(&self, key: &str) -> Lookup<'_, T> {
        Lookup {
            kept: &self.kept,
            positions: self.positions(key).iter(),
        }
    }
    pub fn first(&self, key: &str) -> Option<&T> {
        self.positions(key).first().map(|&position| &self.kept[position])
    }
    pub fn last(&self, key: &str) -> Option<&T> {
        self.positions(key).last().map(|&position| &self.kept[position])
    }
    pub fn count(&self, key: &str) -> usize {
        self.positions(key).len()
    }
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
    pub fn iter(&self) -> Iter<'_, T> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    fn positions(&self, key: &str) -> &[usize] {
        self.index.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

pub struct Lookup<'a, T> {
    kept: &'a [T],
    positions: Iter<'a, usize>,
}

impl<'a, T> Iterator for Lookup<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.positions.next().map(|&position| &self.kept[position])
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<T: Keyed> Default for Keeper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Keeper<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// the index is derived, so only the ordered items are written out
impl<T: Keyed + Serialize> Serialize for Keeper<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.kept.iter())
    }
}
