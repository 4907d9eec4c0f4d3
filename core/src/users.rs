//! # User Directory
//!
//! The user-management panel: a read-mostly list of accounts whose only
//! mutation is a delete, and every delete has to be confirmed first. The
//! directory shares no state with the cart.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::table::Table;

pub const USER_COLUMNS: [&str; 4] = ["Name", "Email", "Role", "Status"];

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("no user with email '{0}'")]
    NotFound(String),
    #[error("'{0}' is listed more than once")]
    Duplicate(String),
    #[error("failed to read users '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed user list: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl User {
    pub fn new(name: &str, email: &str, role: &str, status: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status: status.to_string(),
        }
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
            self.status.clone(),
        ]
    }
}

/// Asks whoever sits in front of the UI to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Approves everything. Backs the `--yes` flag.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Result<Self, UserError> {
        for (idx, user) in users.iter().enumerate() {
            if users[..idx].iter().any(|other| other.email.eq_ignore_ascii_case(&user.email)) {
                return Err(UserError::Duplicate(user.email.clone()));
            }
        }
        Ok(Self { users })
    }

    pub fn from_json_str(json: &str) -> Result<Self, UserError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, UserError> {
        let json = std::fs::read_to_string(path).map_err(|source| UserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The accounts shipped with the binary.
    pub fn demo() -> Self {
        let users = vec![
            User::new("Maria Santos", "maria.santos@example.com", "Admin", "Active"),
            User::new("Juan Dela Cruz", "juan.delacruz@example.com", "Cashier", "Active"),
            User::new("Ana Reyes", "ana.reyes@example.com", "Cashier", "Inactive"),
            User::new("Paolo Garcia", "paolo.garcia@example.com", "Inventory", "Active"),
            User::new("Liza Mendoza", "liza.mendoza@example.com", "Manager", "Active"),
        ];
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The count shown on the dashboard's user tile.
    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    /// Email lookup, ignoring ASCII case.
    pub fn find(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Deletes the user with `email` once `confirm` approves.
    ///
    /// An unknown email fails before anyone is asked.
    pub fn delete(&mut self, email: &str, confirm: &dyn Confirm) -> Result<DeleteOutcome, UserError> {
        let idx = self
            .users
            .iter()
            .position(|user| user.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        if !confirm.confirm(DELETE_PROMPT) {
            debug!(email, "user delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.users.remove(idx);
        debug!(email = removed.email.as_str(), remaining = self.users.len(), "user deleted");
        Ok(DeleteOutcome::Deleted)
    }

    pub fn to_table(&self) -> Table {
        Table::new(
            USER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            self.users.iter().map(User::to_row).collect(),
        )
    }
}
