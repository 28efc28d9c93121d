use std::collections::HashMap;

use sqlx::SqlitePool;

use super::{ensure_deleted, person_detail, require_person, ServiceError, ServiceResult, PERSON_NOT_FOUND};
use crate::database::models::{Event, Person};

/// A person together with the events it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetail {
    pub person: Person,
    pub events: Vec<Event>,
}

pub struct PersonService {
    pool: SqlitePool,
}

impl PersonService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new person; the name must not exist yet.
    pub async fn create(&self, nome: &str) -> ServiceResult<PersonDetail> {
        let result = sqlx::query_as::<_, Person>("INSERT INTO pessoa (nome) VALUES (?) RETURNING id, nome")
            .bind(nome)
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(person) => Ok(PersonDetail { person, events: Vec::new() }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(ServiceError::Conflict(
                "Pessoa de mesmo nome já salva na base :/".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<PersonDetail>> {
        let people = sqlx::query_as::<_, Person>("SELECT id, nome FROM pessoa ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let events = sqlx::query_as::<_, Event>("SELECT id, nome, pessoa FROM evento ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut by_person: HashMap<i64, Vec<Event>> = HashMap::new();
        for event in events {
            by_person.entry(event.pessoa).or_default().push(event);
        }

        Ok(people
            .into_iter()
            .map(|person| {
                let events = by_person.remove(&person.id).unwrap_or_default();
                PersonDetail { person, events }
            })
            .collect())
    }

    pub async fn get(&self, id: i64) -> ServiceResult<PersonDetail> {
        let mut conn = self.pool.acquire().await?;
        let person = require_person(&mut conn, id).await?;
        person_detail(&mut conn, person).await
    }

    /// Delete a person with its day routines, routine templates and events.
    ///
    /// Child rows are removed before the person row is looked at, so an
    /// unknown id still clears any rows that reference it. Everything happens
    /// in one transaction.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM rotina_dia WHERE id_pessoa = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM rotina_padrao WHERE id_pessoa = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM evento WHERE pessoa = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM pessoa WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        ensure_deleted(deleted, PERSON_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{count, pool};
    use crate::services::{EventService, NewRoutineTemplates, RoutineTemplateService};
    use crate::types::TimeOfDay;

    #[tokio::test]
    async fn create_then_get() {
        let pool = pool().await;
        let service = PersonService::new(pool.clone());

        let created = service.create("Ana").await.unwrap();
        assert_eq!(created.person.nome, "Ana");
        assert!(created.events.is_empty());

        let fetched = service.get(created.person.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let pool = pool().await;
        let service = PersonService::new(pool);

        service.create("Ana").await.unwrap();
        let err = service.create("Ana").await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn list_is_empty_then_groups_events() {
        let pool = pool().await;
        let service = PersonService::new(pool.clone());
        assert!(service.list().await.unwrap().is_empty());

        let ana = service.create("Ana").await.unwrap().person;
        let bia = service.create("Bia").await.unwrap().person;
        let events = EventService::new(pool.clone());
        events.add_to_person(ana.id, "Correr").await.unwrap();
        events.add_to_person(ana.id, "Ler").await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].person, ana);
        assert_eq!(listed[0].events.len(), 2);
        assert_eq!(listed[1].person, bia);
        assert!(listed[1].events.is_empty());
    }

    #[tokio::test]
    async fn missing_person_is_not_found() {
        let pool = pool().await;
        let service = PersonService::new(pool);
        assert!(matches!(service.get(42).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(service.delete(42).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_rows() {
        let pool = pool().await;
        let service = PersonService::new(pool.clone());
        let ana = service.create("Ana").await.unwrap().person;
        let bia = service.create("Bia").await.unwrap().person;

        let events = EventService::new(pool.clone());
        let ana_event = events.add_to_person(ana.id, "Correr").await.unwrap().events[0].id;
        let bia_event = events.add_to_person(bia.id, "Ler").await.unwrap().events[0].id;

        let templates = RoutineTemplateService::new(pool.clone());
        for (person, event) in [(ana.id, ana_event), (bia.id, bia_event)] {
            templates
                .create(NewRoutineTemplates {
                    id_pessoa: person,
                    id_evento: event,
                    weekdays: vec!["seg".into(), "qua".into()],
                    hora: TimeOfDay::parse("07:00").unwrap(),
                    data_atual: crate::types::parse_datetime("2024-05-10").unwrap(),
                })
                .await
                .unwrap();
        }

        service.delete(ana.id).await.unwrap();

        assert_eq!(count(&pool, "SELECT COUNT(*) FROM pessoa").await, 1);
        assert_eq!(count(&pool, &format!("SELECT COUNT(*) FROM evento WHERE pessoa = {}", ana.id)).await, 0);
        assert_eq!(count(&pool, &format!("SELECT COUNT(*) FROM rotina_padrao WHERE id_pessoa = {}", ana.id)).await, 0);
        assert_eq!(count(&pool, &format!("SELECT COUNT(*) FROM rotina_dia WHERE id_pessoa = {}", ana.id)).await, 0);

        // Bia's rows are untouched
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM rotina_padrao").await, 2);
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM rotina_dia").await, 7);
    }
}
