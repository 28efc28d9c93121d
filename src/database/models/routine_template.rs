use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Weekly recurrence rule: one row per weekday label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RoutineTemplate {
    pub id: i64,
    pub hora: String,
    pub diasemana: String,
    pub id_evento: i64,
    pub id_pessoa: i64,
}
