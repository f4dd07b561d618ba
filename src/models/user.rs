//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

use super::permission::{Actor, Permission};

/// User database model (the columns problems care about)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Name to show next to problems the user wrote
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

impl Actor for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn can(&self, permission: Permission) -> bool {
        match permission {
            Permission::EditProblem => matches!(self.role.as_str(), roles::ADMIN | roles::ORGANIZER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            display_name: None,
            role: role.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_edit_problem_permission_by_role() {
        let allowed: Vec<&str> = roles::ALL
            .iter()
            .copied()
            .filter(|role| user_with_role(role).can(Permission::EditProblem))
            .collect();
        assert_eq!(allowed, vec![roles::ADMIN, roles::ORGANIZER]);
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = user_with_role(roles::PARTICIPANT);
        assert_eq!(user.display_name(), "alice");
        user.display_name = Some("Alice L.".to_string());
        assert_eq!(user.display_name(), "Alice L.");
    }
}
