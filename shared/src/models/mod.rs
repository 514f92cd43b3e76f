//! Domain models
//!
//! Plain serde structs mapped onto the persistence layer's records. Relation
//! vectors (`orders`, `maintenances`, ...) are populated by the caller before
//! handing snapshots to the engine; the engine never fetches.

pub mod customer;
pub mod dock;
pub mod order;
pub mod user;

pub use customer::Customer;
pub use dock::{Dock, DockMaintenance, DockSchedule};
pub use order::{Order, OrderCreate, OrderItem, OrderItemInput, OrderStatus};
pub use user::User;
