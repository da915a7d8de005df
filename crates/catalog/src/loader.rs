//! Seed-file loading.
//!
//! Catalogs are loaded from a single JSON file holding hostels and rooms.
//! Loading is permissive about referential integrity: a room pointing at an
//! unknown hostel is kept (the engine drops orphans at query time), but a
//! warning is logged so operators can spot bad data.

use crate::error::{CatalogError, Result};
use crate::index::CatalogIndex;
use crate::types::{Hostel, Room};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// On-disk shape of a catalog seed file.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    hostels: Vec<Hostel>,
    #[serde(default)]
    rooms: Vec<Room>,
}

impl CatalogIndex {
    /// Load a catalog from a JSON seed file.
    ///
    /// # Errors
    /// * `FileNotFound` if the path does not exist
    /// * `Malformed` if the file is not valid catalog JSON
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let seed: SeedFile =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Malformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut index = CatalogIndex::new();

        for hostel in seed.hostels {
            if index.get_hostel(&hostel.id).is_some() {
                warn!("Duplicate hostel id '{}', keeping the later record", hostel.id);
            }
            index.insert_hostel(hostel);
        }

        for room in seed.rooms {
            if index.get_room(&room.id).is_some() {
                warn!("Duplicate room id '{}', keeping the later record", room.id);
            }
            if index.get_hostel(&room.hostel_id).is_none() {
                warn!(
                    "Room '{}' references unknown hostel '{}'; it will never match a search",
                    room.id, room.hostel_id
                );
            }
            index.insert_room(room);
        }

        Ok(index)
    }
}
