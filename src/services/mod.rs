//! Persistence-backed operations behind the route handlers.
//!
//! Each service owns a clone of the pool. Mutations run inside a single
//! transaction that is committed once; dropping it early rolls back.

pub mod day_routine_service;
pub mod event_service;
pub mod person_service;
pub mod routine_template_service;

pub use day_routine_service::{DayRoutineService, NewDayRoutine};
pub use event_service::EventService;
pub use person_service::{PersonDetail, PersonService};
pub use routine_template_service::{NewRoutineTemplates, RoutineTemplateService};

use sqlx::SqliteConnection;

use crate::database::models::{Event, Person};

pub const PERSON_NOT_FOUND: &str = "Pessoa não encontrada na base :/";
pub const EVENT_NOT_FOUND: &str = "Evento não encontrado na base :/";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub(crate) async fn require_person(conn: &mut SqliteConnection, id: i64) -> ServiceResult<Person> {
    sqlx::query_as::<_, Person>("SELECT id, nome FROM pessoa WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(PERSON_NOT_FOUND.to_string()))
}

pub(crate) async fn require_event(conn: &mut SqliteConnection, id: i64) -> ServiceResult<Event> {
    sqlx::query_as::<_, Event>("SELECT id, nome, pessoa FROM evento WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(EVENT_NOT_FOUND.to_string()))
}

pub(crate) async fn person_detail(conn: &mut SqliteConnection, person: Person) -> ServiceResult<PersonDetail> {
    let events = sqlx::query_as::<_, Event>("SELECT id, nome, pessoa FROM evento WHERE pessoa = ? ORDER BY id")
        .bind(person.id)
        .fetch_all(conn)
        .await?;
    Ok(PersonDetail { person, events })
}

/// Maps a zero-row delete to NotFound.
pub(crate) fn ensure_deleted(rows_affected: u64, not_found: &str) -> ServiceResult<()> {
    if rows_affected == 0 {
        Err(ServiceError::NotFound(not_found.to_string()))
    } else {
        Ok(())
    }
}
