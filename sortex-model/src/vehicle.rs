use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vehicle from the fleet roster, identified by its number plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
}
