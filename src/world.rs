use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Stable key of a solar system, e.g. `30000142`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SystemId(String);

impl SystemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SystemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SystemStaticInfo {
    pub solar_system_name: String,
    pub region_name: String,
    #[serde(default)]
    pub constellation_name: String,
    #[serde(default)]
    pub security: f32,
    #[serde(default)]
    pub system_class: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub statics: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SystemRecord {
    pub id: SystemId,
    pub static_info: SystemStaticInfo,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SystemRecord {
    pub fn display_name(&self) -> &str {
        &self.static_info.solar_system_name
    }
}

/// Every known system, keyed and ordered by identifier.
#[derive(Resource, Debug, Default)]
pub struct SystemRegistry {
    records: BTreeMap<SystemId, SystemRecord>,
}

impl SystemRegistry {
    /// Builds a registry; later records replace earlier ones with the same id.
    pub fn from_records(records: impl IntoIterator<Item = SystemRecord>) -> Self {
        let mut registry = Self::default();
        for record in records {
            registry.insert(record);
        }
        registry
    }

    /// Returns the record that was replaced, if any.
    pub fn insert(&mut self, record: SystemRecord) -> Option<SystemRecord> {
        self.records.insert(record.id.clone(), record)
    }

    pub fn get(&self, id: &SystemId) -> Option<&SystemRecord> {
        self.records.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SystemRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Systems currently chosen on the map. Owned by map interaction code.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct MapSelection {
    systems: Vec<SystemId>,
}

impl MapSelection {
    pub fn systems(&self) -> &[SystemId] {
        &self.systems
    }

    pub fn contains(&self, id: &SystemId) -> bool {
        self.systems.contains(id)
    }

    pub fn select_only(&mut self, id: SystemId) {
        self.systems.clear();
        self.systems.push(id);
    }

    pub fn toggle(&mut self, id: SystemId) {
        if let Some(index) = self.systems.iter().position(|entry| *entry == id) {
            self.systems.remove(index);
        } else {
            self.systems.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.systems.clear();
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample_record(id: &str, name: &str, region: &str) -> SystemRecord {
    SystemRecord {
        id: SystemId::new(id),
        static_info: SystemStaticInfo {
            solar_system_name: name.to_string(),
            region_name: region.to_string(),
            constellation_name: String::new(),
            security: 0.9,
            system_class: None,
            effect: None,
            statics: Vec::new(),
        },
        custom_name: None,
        description: None,
    }
}
