use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::ConfigError;

/// Identifier of a group that is a member of the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for GroupId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// The fixed, ordered set of groups. Order drives the combined document.
#[derive(Clone, Debug)]
pub struct GroupRegistry {
    groups: Vec<GroupId>,
}

impl GroupRegistry {
    /// Build a registry from identifiers in combination order.
    pub fn new<I, S>(ids: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups: Vec<GroupId> = Vec::new();
        for id in ids {
            let id = id.into().trim().to_string();
            if id.is_empty() {
                return Err(ConfigError::InvalidGroups("empty group identifier".to_string()));
            }
            if groups.iter().any(|g| g.0 == id) {
                return Err(ConfigError::InvalidGroups(format!("duplicate group '{}'", id)));
            }
            groups.push(GroupId(id));
        }
        if groups.is_empty() {
            return Err(ConfigError::InvalidGroups("no groups configured".to_string()));
        }
        Ok(Self { groups })
    }

    pub fn is_valid_group(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// Look up the registered group with this identifier.
    pub fn resolve(&self, id: &str) -> Option<&GroupId> {
        self.groups.iter().find(|g| g.0 == id)
    }

    pub fn all_groups(&self) -> &[GroupId] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self {
            groups: default_group_ids().into_iter().map(GroupId).collect(),
        }
    }
}

pub fn default_group_ids() -> Vec<String> {
    (1..=5).map(|n| format!("group{}", n)).collect()
}
