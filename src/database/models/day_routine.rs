use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DayRoutine {
    pub id: i64,
    pub hora: String,
    pub id_evento: i64,
    pub id_pessoa: i64,
    pub executou: bool,
    pub data_execucao: NaiveDateTime,
}
