//! Journey file management keyed by user and journey identifiers.
//!
//! Each journey is stored as an individual JSON file in the store directory,
//! with the naming convention `<user>__<journey>_journey.json`. The double
//! underscore separates the two sanitized keys, which can never contain a
//! double underscore themselves.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::JourneyStore;

/// A journey on disk, identified by its (user, journey) key pair.
#[derive(Debug, Clone)]
pub struct Journey {
    pub user: String,
    pub name: String,
    pub file_path: PathBuf,
}

impl Journey {
    /// Create a journey handle for the given user and journey names.
    pub fn new(user: &str, name: &str, store_dir: &Path) -> Self {
        let user = sanitize_key(user);
        let name = sanitize_key(name);
        let file_path = store_dir.join(format!("{}__{}_journey.json", user, name));

        Journey { user, name, file_path }
    }

    /// Parse a journey handle from an existing store file path.
    pub fn from_file(file_path: PathBuf) -> Option<Self> {
        let file_name = file_path.file_stem()?.to_str()?;
        let key = file_name.strip_suffix("_journey")?;
        let (user, name) = key.split_once("__")?;

        if user.is_empty() || name.is_empty() {
            return None;
        }

        Some(Journey {
            user: user.to_string(),
            name: name.to_string(),
            file_path,
        })
    }

    /// Create the store file for this journey if it doesn't exist.
    pub fn create_if_not_exists(&self) -> std::io::Result<()> {
        if !self.file_path.exists() {
            let store = JourneyStore::default();
            store.save(&self.file_path)?;
        }
        Ok(())
    }

    /// Load this journey's store.
    pub fn load_store(&self) -> JourneyStore {
        JourneyStore::load(&self.file_path)
    }
}

/// Convert a display name to a safe key for file naming.
/// Lowercases and collapses runs of non-alphanumeric characters to a single
/// underscore.
pub fn sanitize_key(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Discover all journey files in the store directory, sorted by user then name.
pub fn discover_journeys(store_dir: &Path) -> std::io::Result<Vec<Journey>> {
    let mut journeys = Vec::new();

    if !store_dir.exists() {
        return Ok(journeys);
    }

    for entry in fs::read_dir(store_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(journey) = Journey::from_file(path) {
                journeys.push(journey);
            }
        }
    }

    journeys.sort_by(|a, b| (a.user.as_str(), a.name.as_str()).cmp(&(b.user.as_str(), b.name.as_str())));

    Ok(journeys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_and_lowercases() {
        assert_eq!(sanitize_key("My Journey"), "my_journey");
        assert_eq!(sanitize_key("Cafe! 2026"), "cafe_2026");
        assert_eq!(sanitize_key("  lots   of  spaces "), "lots_of_spaces");
        assert_eq!(sanitize_key(""), "");
    }

    #[test]
    fn file_name_round_trips() {
        let dir = Path::new("/tmp/journeys");
        let j = Journey::new("Ada Lovelace", "Coffee Cart", dir);
        assert_eq!(
            j.file_path.file_name().unwrap().to_str().unwrap(),
            "ada_lovelace__coffee_cart_journey.json"
        );

        let parsed = Journey::from_file(j.file_path.clone()).unwrap();
        assert_eq!(parsed.user, "ada_lovelace");
        assert_eq!(parsed.name, "coffee_cart");
    }

    #[test]
    fn unrelated_files_are_ignored() {
        assert!(Journey::from_file(PathBuf::from("/tmp/notes.json")).is_none());
        assert!(Journey::from_file(PathBuf::from("/tmp/x_journey.json")).is_none());
    }
}
