use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::cell::StateCell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Holds at most one authenticated user
#[derive(Debug)]
pub struct AuthStore {
    cell: StateCell<Option<User>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            cell: StateCell::new(None),
        }
    }

    pub fn set_user(&self, user: User) {
        self.cell.set(Some(user));
    }

    pub fn clear_user(&self) {
        self.cell.set(None);
    }

    pub fn current_user(&self) -> Option<User> {
        self.cell.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.cell.subscribe()
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_authentication_follows_user_presence() {
        let store = AuthStore::new();
        assert!(!store.is_authenticated());

        store.set_user(User {
            id: "u-1".to_string(),
            name: "Operator".to_string(),
            email: "op@example.com".to_string(),
            role: UserRole::Admin,
        });
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().id, "u-1");

        store.clear_user();
        assert!(!store.is_authenticated());
    }
}
