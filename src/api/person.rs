use serde::{Deserialize, Serialize};

use super::event::EventView;
use crate::services::PersonDetail;

#[derive(Debug, Deserialize)]
pub struct PersonForm {
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub id: i64,
    pub nome: String,
    pub total_eventos: usize,
    pub eventos: Vec<EventView>,
}

impl From<PersonDetail> for PersonView {
    fn from(detail: PersonDetail) -> Self {
        Self {
            id: detail.person.id,
            nome: detail.person.nome,
            total_eventos: detail.events.len(),
            eventos: detail.events.into_iter().map(EventView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonListView {
    pub pessoas: Vec<PersonView>,
}

impl From<Vec<PersonDetail>> for PersonListView {
    fn from(details: Vec<PersonDetail>) -> Self {
        Self {
            pessoas: details.into_iter().map(PersonView::from).collect(),
        }
    }
}
