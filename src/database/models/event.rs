use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named activity owned by the person in `pessoa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub nome: String,
    pub pessoa: i64,
}
