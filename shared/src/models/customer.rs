//! Customer Model

use serde::{Deserialize, Serialize};

use super::Order;

/// Customer entity
///
/// `orders` is a weak back-reference for aggregation: the caller populates it
/// with the orders relevant to a report before invoking the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub company_id: String,
    pub name: String,
    /// Enrolled in the loyalty/quota program
    pub is_fidelized: bool,
    pub quota_minutes: i32,
    pub auto_reserve: bool,
    /// Scheduling preference, displayed only
    pub preferred_days: Option<String>,
    pub preferred_time: Option<String>,
    /// Soft-delete flag; inactive customers stay eligible for historical reports
    pub active: bool,
    #[serde(default)]
    pub orders: Vec<Order>,
}
