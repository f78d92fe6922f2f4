//! Application state: the three persisted collections (users, settings,
//! attendance records) and their round-trip through the blob store.
//!
//! Each collection is snapshotted independently right after a mutation, so
//! the stored blobs always mirror the in-memory state.

use crate::db::store::{BlobStore, KEY_RECORDS, KEY_SETTINGS, KEY_USERS};
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::settings::AppSettings;
use crate::models::user::{Role, User};

pub struct AppState {
    pub users: Vec<User>,
    pub settings: AppSettings,
    pub records: Vec<AttendanceRecord>,
}

impl AppState {
    /// Load all collections; missing keys fall back to seeds and defaults.
    pub fn load(store: &dyn BlobStore) -> AppResult<Self> {
        let users = match store.get(KEY_USERS)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => seed_users(),
        };
        let settings = match store.get(KEY_SETTINGS)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => AppSettings::default(),
        };
        let records = match store.get(KEY_RECORDS)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            users,
            settings,
            records,
        })
    }

    pub fn save_users(&self, store: &mut dyn BlobStore) -> AppResult<()> {
        store.set(KEY_USERS, &serde_json::to_string(&self.users)?)
    }

    pub fn save_settings(&self, store: &mut dyn BlobStore) -> AppResult<()> {
        store.set(KEY_SETTINGS, &serde_json::to_string(&self.settings)?)
    }

    pub fn save_records(&self, store: &mut dyn BlobStore) -> AppResult<()> {
        store.set(KEY_RECORDS, &serde_json::to_string(&self.records)?)
    }

    /// Snapshot everything; used by `init` to materialize the seeds.
    pub fn save_all(&self, store: &mut dyn BlobStore) -> AppResult<()> {
        self.save_users(store)?;
        self.save_settings(store)?;
        self.save_records(store)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn require_user(&self, id: &str) -> AppResult<&User> {
        self.user(id)
            .ok_or_else(|| AppError::UnknownUser(id.to_string()))
    }
}

/// First-run employees: one administrator and one sample employee.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "ADM001".to_string(),
            name: "Lucas Hoàng".to_string(),
            role: Role::Admin,
            department: "Executive".to_string(),
            username: Some("lucashoang".to_string()),
            password: Some("123456".to_string()),
            avatar: None,
            email: None,
        },
        User {
            id: "NV001".to_string(),
            name: "Nhân Viên Mẫu".to_string(),
            role: Role::Employee,
            department: "C/O".to_string(),
            username: Some("user01".to_string()),
            password: Some("1".to_string()),
            avatar: None,
            email: None,
        },
    ]
}
