//! Request payloads and JSON projections for each resource.

pub mod day_routine;
pub mod event;
pub mod person;
pub mod routine_template;

use serde::{Deserialize, Serialize};

/// `?id=` lookup shared by the fetch and delete endpoints.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: i64,
}

impl DeleteConfirmation {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self { message: message.into(), id }
    }
}
