use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

use super::groups::{GroupId, GroupRegistry};
use crate::error::BoardError;

/// Fragments of every group, in registry order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupTexts(Vec<(GroupId, String)>);

impl GroupTexts {
    pub fn iter(&self) -> impl Iterator<Item = (&GroupId, &str)> {
        self.0.iter().map(|(g, t)| (g, t.as_str()))
    }

    pub fn get(&self, group: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, t)| t.as_str())
    }
}

impl Serialize for GroupTexts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(g, t)| (g, t)))
    }
}

/// Current text of each group.
#[derive(Debug)]
pub struct FragmentStore {
    registry: Arc<GroupRegistry>,
    fragments: HashMap<GroupId, String>,
    revision: u64,
}

impl FragmentStore {
    pub fn new(registry: Arc<GroupRegistry>) -> Self {
        Self {
            registry,
            fragments: HashMap::new(),
            revision: 0,
        }
    }

    /// Current fragment, empty if the group never wrote anything.
    pub fn get(&self, group: &GroupId) -> &str {
        self.fragments.get(group).map(String::as_str).unwrap_or("")
    }

    /// Overwrite a group's fragment. Every successful write bumps the revision.
    pub fn set(&mut self, group: &str, text: String) -> Result<GroupId, BoardError> {
        let group = self
            .registry
            .resolve(group)
            .cloned()
            .ok_or_else(|| BoardError::invalid_group(group))?;
        self.fragments.insert(group.clone(), text);
        self.revision += 1;
        Ok(group)
    }

    /// Number of successful writes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> GroupTexts {
        GroupTexts(
            self.registry
                .all_groups()
                .iter()
                .map(|g| (g.clone(), self.get(g).to_string()))
                .collect(),
        )
    }
}
