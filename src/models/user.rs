use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Identity record for one employee. Ids are stable strings assigned at
/// creation and never reused; employees are edited but never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub department: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: &str, name: &str, role: Role, department: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            department: department.to_string(),
            username: None,
            password: None,
            avatar: None,
            email: None,
        }
    }

    /// Next free "NVnnn" id, scanning the numeric suffix of existing ids.
    pub fn next_id(users: &[User]) -> String {
        let max = users
            .iter()
            .filter_map(|u| u.id.strip_prefix("NV"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("NV{:03}", max + 1)
    }
}
