use chrono::{Duration, NaiveDateTime};
use sqlx::{SqliteConnection, SqlitePool};

use super::{
    ensure_deleted, person_detail, require_event, require_person, PersonDetail, ServiceError, ServiceResult,
};
use crate::database::models::{DayRoutine, RoutineTemplate};
use crate::types::TimeOfDay;

pub const BACKFILL_DAYS: i64 = 7;
const TEMPLATE_NOT_FOUND: &str = "Rotina Padrão não encontrada na base :/";

#[derive(Debug, Clone)]
pub struct NewRoutineTemplates {
    pub id_pessoa: i64,
    pub id_evento: i64,
    pub weekdays: Vec<String>,
    pub hora: TimeOfDay,
    /// Reference date; the backfill covers the seven days before it.
    pub data_atual: NaiveDateTime,
}

pub struct RoutineTemplateService {
    pool: SqlitePool,
}

impl RoutineTemplateService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one template per weekday, then backfill the previous week of
    /// day routines as already done.
    pub async fn create(&self, new: NewRoutineTemplates) -> ServiceResult<PersonDetail> {
        if new.weekdays.is_empty() {
            return Err(ServiceError::Validation("Informe ao menos um dia da semana".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let person = require_person(&mut tx, new.id_pessoa).await?;
        let event = require_event(&mut tx, new.id_evento).await?;

        insert_templates(&mut tx, person.id, event.id, &new.hora, &new.weekdays).await?;
        backfill_day_routines(&mut tx, person.id, event.id, &new.hora, new.data_atual).await?;

        let detail = person_detail(&mut tx, person).await?;
        tx.commit().await?;
        Ok(detail)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let deleted = sqlx::query("DELETE FROM rotina_padrao WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        ensure_deleted(deleted, TEMPLATE_NOT_FOUND)
    }

    pub async fn list_by_person(&self, id_pessoa: i64) -> ServiceResult<Vec<RoutineTemplate>> {
        let templates = sqlx::query_as::<_, RoutineTemplate>(
            "SELECT id, hora, diasemana, id_evento, id_pessoa FROM rotina_padrao WHERE id_pessoa = ? ORDER BY id",
        )
        .bind(id_pessoa)
        .fetch_all(&self.pool)
        .await?;
        Ok(templates)
    }
}

/// One template row per weekday label, in the order given.
pub async fn insert_templates(
    conn: &mut SqliteConnection,
    id_pessoa: i64,
    id_evento: i64,
    hora: &TimeOfDay,
    weekdays: &[String],
) -> ServiceResult<Vec<RoutineTemplate>> {
    let mut inserted = Vec::with_capacity(weekdays.len());
    for weekday in weekdays {
        let template = sqlx::query_as::<_, RoutineTemplate>(
            "INSERT INTO rotina_padrao (hora, diasemana, id_evento, id_pessoa) VALUES (?, ?, ?, ?) \
             RETURNING id, hora, diasemana, id_evento, id_pessoa",
        )
        .bind(hora.as_str())
        .bind(weekday)
        .bind(id_evento)
        .bind(id_pessoa)
        .fetch_one(&mut *conn)
        .await?;
        inserted.push(template);
    }
    Ok(inserted)
}

/// `reference - 1 day` down to `reference - 7 days`, newest first.
///
/// A reference too close to the earliest representable date is rejected.
pub fn backfill_dates(reference: NaiveDateTime) -> ServiceResult<Vec<NaiveDateTime>> {
    (1..=BACKFILL_DAYS)
        .map(|days| {
            reference.checked_sub_signed(Duration::days(days)).ok_or_else(|| {
                ServiceError::Validation(format!("Data de referência fora do intervalo suportado: {}", reference))
            })
        })
        .collect()
}

/// Seed done day routines for the week before `reference`.
///
/// No upsert here: an existing routine on one of those dates gets a sibling.
pub async fn backfill_day_routines(
    conn: &mut SqliteConnection,
    id_pessoa: i64,
    id_evento: i64,
    hora: &TimeOfDay,
    reference: NaiveDateTime,
) -> ServiceResult<Vec<DayRoutine>> {
    let mut seeded = Vec::with_capacity(BACKFILL_DAYS as usize);
    for date in backfill_dates(reference)? {
        let routine = sqlx::query_as::<_, DayRoutine>(
            "INSERT INTO rotina_dia (hora, id_evento, id_pessoa, executou, data_execucao) VALUES (?, ?, ?, 1, ?) \
             RETURNING id, hora, id_evento, id_pessoa, executou, data_execucao",
        )
        .bind(hora.as_str())
        .bind(id_evento)
        .bind(id_pessoa)
        .bind(date)
        .fetch_one(&mut *conn)
        .await?;
        seeded.push(routine);
    }
    Ok(seeded)
}
