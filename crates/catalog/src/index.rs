//! In-memory catalog index.
//!
//! `CatalogIndex` is the reference implementation of the store traits: it
//! holds all hostels and rooms in memory and answers the same filtered reads
//! a database-backed store would. The CLI and the test suites both build on
//! it.

use crate::types::{Hostel, HostelId, Room, RoomId};
use std::collections::BTreeMap;

/// In-memory store over hostels and rooms with a rooms-by-hostel index.
///
/// BTreeMaps keep iteration order stable by id, so repeated reads against an
/// unchanged index return records in the same order. The engine's ordering
/// guarantees (stable ties when sorting by price) rely on reads being
/// repeatable like this.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    // Primary data stores
    pub(crate) hostels: BTreeMap<HostelId, Hostel>,
    pub(crate) rooms: BTreeMap<RoomId, Room>,
}

impl CatalogIndex {
    /// Creates a new, empty index
    pub fn new() -> Self {
        Self::default()
    }

    // Getters return references; the index keeps ownership of the records.

    /// Get a hostel by id
    pub fn get_hostel(&self, id: &str) -> Option<&Hostel> {
        self.hostels.get(id)
    }

    /// Get a room by id
    pub fn get_room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Iterate over every hostel in id order
    pub fn hostels(&self) -> impl Iterator<Item = &Hostel> {
        self.hostels.values()
    }

    /// Iterate over every room in id order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    // Mutators - used by the loader and by test fixtures.

    /// Insert a hostel, replacing any previous record with the same id
    pub fn insert_hostel(&mut self, hostel: Hostel) {
        self.hostels.insert(hostel.id.clone(), hostel);
    }

    /// Insert a room, replacing any previous record with the same id
    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    /// (hostel count, room count) for logging and validation
    pub fn counts(&self) -> (usize, usize) {
        (self.hostels.len(), self.rooms.len())
    }
}
