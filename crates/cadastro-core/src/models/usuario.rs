//! Usuario entity - the user record created by the registration form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. Records are append-only: they are created by the
/// registration handler and read in bulk by the listing handler, never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    /// Age in years
    pub idade: i32,
    pub created_at: DateTime<Utc>,
}

impl Usuario {
    /// Create a new usuario with a fresh id and creation timestamp
    pub fn new(nome: String, email: String, idade: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            nome,
            email,
            idade,
            created_at: Utc::now(),
        }
    }
}
