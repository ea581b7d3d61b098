use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Globally unique block instance identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Placeholder carried by catalog templates until an id is assigned
    pub fn unassigned() -> Self {
        Self(String::new())
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Generate a session seed from a key (usually the project path) using CRC32
pub fn get_session_id(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential instance id generator for one editing session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Session ID (CRC32)
    count: u64,   // Sequential counter
}

impl IdGenerator {
    pub fn new(key: &str) -> Self {
        Self {
            seed: get_session_id(key),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Advance past every id of the form `{seed}-{n}` already in use
    pub fn resume<'a>(mut self, existing: impl IntoIterator<Item = &'a InstanceId>) -> Self {
        let prefix = format!("{}-", self.seed);
        for id in existing {
            if let Some(n) = id
                .as_str()
                .strip_prefix(&prefix)
                .and_then(|rest| rest.parse::<u64>().ok())
            {
                self.count = self.count.max(n);
            }
        }
        self
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> InstanceId {
        self.count += 1;
        InstanceId(format!("{}-{}", self.seed, self.count))
    }

    /// Generate an ID guaranteed not to be in `taken`
    pub fn new_id_excluding(&mut self, taken: &HashSet<&InstanceId>) -> InstanceId {
        loop {
            let id = self.new_id();
            if !taken.contains(&id) {
                return id;
            }
        }
    }

    /// Get session ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generation() {
        let id1 = get_session_id("/site/page.json");
        let id2 = get_session_id("/site/page.json");

        // Same key always generates same seed
        assert_eq!(id1, id2);

        // Different keys generate different seeds
        let id3 = get_session_id("/other/page.json");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("/test.json");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        // IDs are sequential
        assert!(id1.as_str().ends_with("-1"));
        assert!(id2.as_str().ends_with("-2"));
        assert!(id3.as_str().ends_with("-3"));

        // All share same seed
        let seed = gen.seed();
        assert!(id1.as_str().starts_with(seed));
        assert!(id3.as_str().starts_with(seed));
    }

    #[test]
    fn test_resume_skips_existing_ids() {
        let gen = IdGenerator::from_seed("abc".to_string());
        let existing = vec![
            InstanceId::new("abc-4"),
            InstanceId::new("abc-11"),
            InstanceId::new("hero-init"),
        ];

        let mut gen = gen.resume(&existing);
        assert_eq!(gen.new_id().as_str(), "abc-12");
    }

    #[test]
    fn test_excluding_skips_taken() {
        let mut gen = IdGenerator::from_seed("abc".to_string());
        let taken_id = InstanceId::new("abc-1");
        let taken: HashSet<&InstanceId> = [&taken_id].into_iter().collect();

        assert_eq!(gen.new_id_excluding(&taken).as_str(), "abc-2");
    }
}
