use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A driver from the fleet roster.
///
/// Rows are created by seeding (or an external admin process) and are
/// read-only from the tracker's point of view; missions reference them by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub name: String,
}
