//! User Model

use serde::{Deserialize, Serialize};

/// Backoffice user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub email: String,
    /// Ceiling applied to every line-item discount on orders this user creates (0-100)
    pub max_discount: f64,
    pub active: bool,
}
