use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::models::RoutineTemplate;
use crate::types::{deserialize_datetime, TimeOfDay};

#[derive(Debug, Deserialize)]
pub struct RoutineTemplateForm {
    pub id_pessoa: i64,
    pub id_evento: i64,
    /// Comma separated weekday labels, e.g. `seg,qua,sex`.
    pub diassemana: String,
    pub hora: TimeOfDay,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub data_atual: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTemplateView {
    pub id: i64,
    pub hora: String,
    pub diasemana: String,
    pub id_evento: i64,
    pub id_pessoa: i64,
}

impl From<RoutineTemplate> for RoutineTemplateView {
    fn from(t: RoutineTemplate) -> Self {
        Self {
            id: t.id,
            hora: t.hora,
            diasemana: t.diasemana,
            id_evento: t.id_evento,
            id_pessoa: t.id_pessoa,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoutineTemplateListView {
    pub rotinaspadrao: Vec<RoutineTemplateView>,
}

impl From<Vec<RoutineTemplate>> for RoutineTemplateListView {
    fn from(templates: Vec<RoutineTemplate>) -> Self {
        Self {
            rotinaspadrao: templates.into_iter().map(RoutineTemplateView::from).collect(),
        }
    }
}
