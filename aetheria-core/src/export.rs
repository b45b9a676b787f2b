//! Realm transfer packages: export curriculum content to a JSON package and
//! import it with fresh identity.
//!
//! A package carries realms and quests only. Learner state (submissions,
//! crystals, profiles) never travels; imported quests always start over as
//! `Available` with new ids, so the same package can be imported into many
//! classrooms without collisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ImportError;
use crate::theme::Theme;
use crate::types::{Quest, QuestStatus, Realm};

/// Current package format version.
pub const PACKAGE_VERSION: &str = "1.0";

/// A self-contained bundle of curriculum content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPackage {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub realms: Vec<Realm>,
    pub quests: Vec<Quest>,
    pub theme: Theme,
}

impl ExportPackage {
    /// Bundle the given realms and quests for transfer.
    pub fn new(realms: Vec<Realm>, quests: Vec<Quest>, theme: Theme) -> Self {
        Self {
            version: PACKAGE_VERSION.to_string(),
            exported_at: Utc::now(),
            realms,
            quests,
            theme,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Prepare an imported package for insertion into a store.
///
/// Every realm and quest receives a fresh id (with quest realm references
/// remapped to the new realm ids), prerequisite lists are cleared, and all
/// quest statuses reset to `Available`. A quest referencing a realm the
/// package does not carry is an error.
pub fn import_package(
    package: ExportPackage,
) -> Result<(Vec<Realm>, Vec<Quest>), ImportError> {
    if package.version != PACKAGE_VERSION {
        return Err(ImportError::UnsupportedVersion(package.version));
    }

    let mut realm_ids: HashMap<Uuid, Uuid> = HashMap::new();
    let mut realms = package.realms;
    for realm in realms.iter_mut() {
        let fresh = Uuid::new_v4();
        realm_ids.insert(realm.id, fresh);
        realm.id = fresh;
    }

    let mut quests = package.quests;
    for quest in quests.iter_mut() {
        let mapped = realm_ids
            .get(&quest.realm_id)
            .ok_or_else(|| ImportError::UnknownRealm {
                quest_name: quest.name.clone(),
                realm_id: quest.realm_id,
            })?;
        quest.id = Uuid::new_v4();
        quest.realm_id = *mapped;
        quest.status = QuestStatus::Available;
        // Prerequisites reference crystals that stay with the exporter.
        quest.prerequisite_ids.clear();
    }

    Ok((realms, quests))
}
