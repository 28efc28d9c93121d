use axum::{extract::State, Json};

use super::{reject, ApiResult};
use crate::api::person::{PersonForm, PersonListView, PersonView};
use crate::api::{DeleteConfirmation, IdQuery};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ValidForm, ValidQuery};
use crate::services::PersonService;

/// POST /pessoa - add a person; the name must be unique
pub async fn person_post(State(state): State<AppState>, ValidForm(form): ValidForm<PersonForm>) -> ApiResult<PersonView> {
    let nome = form.nome.trim();
    if nome.is_empty() {
        return Err(ApiError::validation_error("O nome da pessoa é obrigatório"));
    }
    tracing::debug!("Adding person '{}'", nome);

    let detail = PersonService::new(state.pool)
        .create(nome)
        .await
        .map_err(|e| reject(&format!("add person '{}'", nome), e))?;

    tracing::debug!("Added person '{}' as #{}", nome, detail.person.id);
    Ok(Json(detail.into()))
}

/// GET /pessoas - every person; an empty list is not an error
pub async fn person_list(State(state): State<AppState>) -> ApiResult<PersonListView> {
    tracing::debug!("Listing people");
    let people = PersonService::new(state.pool)
        .list()
        .await
        .map_err(|e| reject("list people", e))?;

    tracing::debug!("{} people found", people.len());
    Ok(Json(people.into()))
}

/// GET /pessoa?id= - one person with its events
pub async fn person_get(State(state): State<AppState>, ValidQuery(query): ValidQuery<IdQuery>) -> ApiResult<PersonView> {
    tracing::debug!("Fetching person #{}", query.id);
    let detail = PersonService::new(state.pool)
        .get(query.id)
        .await
        .map_err(|e| reject(&format!("fetch person #{}", query.id), e))?;

    Ok(Json(detail.into()))
}

/// DELETE /pessoa?id= - remove a person and everything it owns
pub async fn person_delete(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ApiResult<DeleteConfirmation> {
    tracing::debug!("Deleting person #{}", query.id);
    PersonService::new(state.pool)
        .delete(query.id)
        .await
        .map_err(|e| reject(&format!("delete person #{}", query.id), e))?;

    tracing::debug!("Deleted person #{}", query.id);
    Ok(Json(DeleteConfirmation::new("Pessoa removida", query.id)))
}
