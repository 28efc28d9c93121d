use sqlx::SqlitePool;

use super::{ensure_deleted, person_detail, require_person, PersonDetail, ServiceResult, EVENT_NOT_FOUND};

pub struct EventService {
    pool: SqlitePool,
}

impl EventService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an event to a person and return the person with all its events.
    pub async fn add_to_person(&self, id_pessoa: i64, nome: &str) -> ServiceResult<PersonDetail> {
        let mut tx = self.pool.begin().await?;

        let person = require_person(&mut tx, id_pessoa).await?;
        sqlx::query("INSERT INTO evento (nome, pessoa) VALUES (?, ?)")
            .bind(nome)
            .bind(person.id)
            .execute(&mut *tx)
            .await?;
        let detail = person_detail(&mut tx, person).await?;

        tx.commit().await?;
        Ok(detail)
    }

    /// Routines pointing at the event go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let deleted = sqlx::query("DELETE FROM evento WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        ensure_deleted(deleted, EVENT_NOT_FOUND)
    }
}
