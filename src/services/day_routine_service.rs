use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use super::{ensure_deleted, require_event, require_person, ServiceResult};
use crate::database::models::DayRoutine;
use crate::types::TimeOfDay;

const DAY_ROUTINE_NOT_FOUND: &str = "Rotina Dia não encontrada na base :/";

const SELECT_COLUMNS: &str = "SELECT id, hora, id_evento, id_pessoa, executou, data_execucao FROM rotina_dia";

#[derive(Debug, Clone)]
pub struct NewDayRoutine {
    pub id_pessoa: i64,
    pub id_evento: i64,
    pub hora: TimeOfDay,
    pub executou: bool,
    pub data_execucao: NaiveDateTime,
}

pub struct DayRoutineService {
    pool: SqlitePool,
}

impl DayRoutineService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a day routine keyed by (hora, person, event, calendar date).
    ///
    /// When a row with that key exists only its `executou` flag changes; the
    /// stored time part of `data_execucao` is kept. Otherwise a new row is
    /// inserted.
    pub async fn upsert(&self, new: NewDayRoutine) -> ServiceResult<DayRoutine> {
        let mut tx = self.pool.begin().await?;

        let person = require_person(&mut tx, new.id_pessoa).await?;
        let event = require_event(&mut tx, new.id_evento).await?;

        let existing = sqlx::query_as::<_, DayRoutine>(&format!(
            "{SELECT_COLUMNS} WHERE hora = ? AND id_pessoa = ? AND id_evento = ? \
             AND date(data_execucao) = ? ORDER BY id LIMIT 1"
        ))
        .bind(new.hora.as_str())
        .bind(person.id)
        .bind(event.id)
        .bind(new.data_execucao.date())
        .fetch_optional(&mut *tx)
        .await?;

        let routine = match existing {
            Some(found) => {
                tracing::debug!("Updating done flag of day routine #{}", found.id);
                sqlx::query_as::<_, DayRoutine>(
                    "UPDATE rotina_dia SET executou = ? WHERE id = ? \
                     RETURNING id, hora, id_evento, id_pessoa, executou, data_execucao",
                )
                .bind(new.executou)
                .bind(found.id)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as::<_, DayRoutine>(
                    "INSERT INTO rotina_dia (hora, id_evento, id_pessoa, executou, data_execucao) VALUES (?, ?, ?, ?, ?) \
                     RETURNING id, hora, id_evento, id_pessoa, executou, data_execucao",
                )
                .bind(new.hora.as_str())
                .bind(event.id)
                .bind(person.id)
                .bind(new.executou)
                .bind(new.data_execucao)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;
        Ok(routine)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let deleted = sqlx::query("DELETE FROM rotina_dia WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        ensure_deleted(deleted, DAY_ROUTINE_NOT_FOUND)
    }

    /// Routines of a person on the same calendar day as `data_execucao`;
    /// the time part is ignored.
    pub async fn list_on_date(&self, id_pessoa: i64, data_execucao: NaiveDateTime) -> ServiceResult<Vec<DayRoutine>> {
        let routines = sqlx::query_as::<_, DayRoutine>(&format!(
            "{SELECT_COLUMNS} WHERE id_pessoa = ? AND date(data_execucao) = ? ORDER BY data_execucao, id"
        ))
        .bind(id_pessoa)
        .bind(data_execucao.date())
        .fetch_all(&self.pool)
        .await?;
        Ok(routines)
    }

    /// Routines of a person with `data_execucao >= since`, compared as full
    /// datetimes.
    pub async fn list_since(&self, id_pessoa: i64, since: NaiveDateTime) -> ServiceResult<Vec<DayRoutine>> {
        let routines = sqlx::query_as::<_, DayRoutine>(&format!(
            "{SELECT_COLUMNS} WHERE id_pessoa = ? AND data_execucao >= ? ORDER BY data_execucao, id"
        ))
        .bind(id_pessoa)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(routines)
    }
}
