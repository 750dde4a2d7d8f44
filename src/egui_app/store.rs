//! In-memory mirror of the last successful locker listing.

use crate::shared::locker::Locker;

/// Records from the most recent successful list call, in server order.
///
/// The only mutation is wholesale replacement, so every value held here comes
/// from one specific listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockerStore {
    lockers: Vec<Locker>,
}

impl LockerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, lockers: Vec<Locker>) {
        self.lockers = lockers;
    }

    /// First record with this id
    pub fn get(&self, locker_id: &str) -> Option<&Locker> {
        self.lockers.iter().find(|locker| locker.id() == locker_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Locker> {
        self.lockers.iter()
    }

    pub fn as_slice(&self) -> &[Locker] {
        &self.lockers
    }

    pub fn len(&self) -> usize {
        self.lockers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lockers.is_empty()
    }
}

impl<'a> IntoIterator for &'a LockerStore {
    type Item = &'a Locker;
    type IntoIter = std::slice::Iter<'a, Locker>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
