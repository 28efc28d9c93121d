use serde::{Deserialize, Serialize};

use crate::database::models::Event;

#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub id_pessoa: i64,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub id: i64,
    pub nome: String,
}

impl From<Event> for EventView {
    fn from(event: Event) -> Self {
        Self { id: event.id, nome: event.nome }
    }
}
