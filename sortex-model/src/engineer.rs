use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A field engineer from the roster.
///
/// `branch` is the engineering discipline (construction, electrical, ...).
/// Missions embed engineers as snapshots rather than joining on this table,
/// so renaming an engineer here never rewrites mission history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Engineer {
    pub id: i64,
    pub name: String,
    pub branch: String,
}
