use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::models::DayRoutine;
use crate::types::{deserialize_datetime, deserialize_flag, TimeOfDay};

#[derive(Debug, Deserialize)]
pub struct DayRoutineForm {
    pub id_pessoa: i64,
    pub id_evento: i64,
    pub hora: TimeOfDay,
    #[serde(deserialize_with = "deserialize_flag")]
    pub executou: bool,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub data_execucao: NaiveDateTime,
}

/// Person plus execution date, used by both day-routine searches.
#[derive(Debug, Deserialize)]
pub struct DayRoutineSearchForm {
    pub id_pessoa: i64,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub data_execucao: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoutineView {
    pub id: i64,
    pub hora: String,
    pub id_evento: i64,
    pub id_pessoa: i64,
    pub executou: bool,
    #[serde(with = "iso_datetime")]
    pub data_execucao: NaiveDateTime,
}

impl From<DayRoutine> for DayRoutineView {
    fn from(r: DayRoutine) -> Self {
        Self {
            id: r.id,
            hora: r.hora,
            id_evento: r.id_evento,
            id_pessoa: r.id_pessoa,
            executou: r.executou,
            data_execucao: r.data_execucao,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayRoutineListView {
    pub rotinasdia: Vec<DayRoutineView>,
}

impl From<Vec<DayRoutine>> for DayRoutineListView {
    fn from(routines: Vec<DayRoutine>) -> Self {
        Self {
            rotinasdia: routines.into_iter().map(DayRoutineView::from).collect(),
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SS`, whole seconds.
mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        crate::types::parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}
