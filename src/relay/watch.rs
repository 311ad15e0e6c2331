use std::collections::HashSet;

use crate::utils::error::{RelayError, Result};

/// The object types that trigger a notification.
///
/// Membership is exact and case-sensitive. The set is built once at startup
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSet {
    objects: HashSet<String>,
}

impl WatchSet {
    /// Parses a comma-separated list such as `"person,car"`.
    ///
    /// Surrounding whitespace is trimmed and empty entries are skipped. A list
    /// without any entry is rejected.
    pub fn parse(csv: &str) -> Result<Self> {
        let objects: HashSet<String> = csv
            .split(',')
            .map(str::trim)
            .filter(|object| !object.is_empty())
            .map(str::to_string)
            .collect();

        if objects.is_empty() {
            return Err(RelayError::configuration(format!(
                "no object types in watch-list {csv:?}"
            )));
        }

        Ok(Self { objects })
    }

    pub fn contains(&self, object: &str) -> bool {
        self.objects.contains(object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Entries in sorted order, for logging.
    pub fn sorted(&self) -> Vec<&str> {
        let mut objects: Vec<&str> = self.objects.iter().map(String::as_str).collect();
        objects.sort_unstable();
        objects
    }
}
