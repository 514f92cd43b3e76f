//! Dock Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Order;

/// Recurring weekly availability window (displayed only, not used by the
/// utilization calculation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockSchedule {
    pub id: String,
    pub dock_id: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: i32,
    /// Time of day, `HH:MM`
    pub start_time: String,
    pub end_time: String,
}

/// Maintenance blackout interval. Invariant: `end_date >= start_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockMaintenance {
    pub id: String,
    pub dock_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reason: Option<String>,
}

/// Loading dock entity
///
/// Relation vectors are populated by the caller: for a utilization report,
/// `orders` holds orders scheduled inside the window (cancelled excluded) and
/// `maintenances` holds blackouts intersecting the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dock {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Soft-delete flag
    pub active: bool,
    #[serde(default)]
    pub schedules: Vec<DockSchedule>,
    #[serde(default)]
    pub maintenances: Vec<DockMaintenance>,
    #[serde(default)]
    pub orders: Vec<Order>,
}
