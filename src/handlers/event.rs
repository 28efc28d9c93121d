use axum::{extract::State, Json};

use super::{reject, ApiResult};
use crate::api::event::EventForm;
use crate::api::person::PersonView;
use crate::api::{DeleteConfirmation, IdQuery};
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ValidForm, ValidQuery};
use crate::services::EventService;

/// POST /evento - attach a new event to a person, returns the person
pub async fn event_post(State(state): State<AppState>, ValidForm(form): ValidForm<EventForm>) -> ApiResult<PersonView> {
    let nome = form.nome.trim();
    if nome.is_empty() {
        return Err(ApiError::validation_error("O nome do evento é obrigatório"));
    }
    tracing::debug!("Adding event '{}' to person #{}", nome, form.id_pessoa);

    let detail = EventService::new(state.pool)
        .add_to_person(form.id_pessoa, nome)
        .await
        .map_err(|e| reject(&format!("add event to person #{}", form.id_pessoa), e))?;

    tracing::debug!("Added event to person #{}", form.id_pessoa);
    Ok(Json(detail.into()))
}

/// DELETE /evento?id=
pub async fn event_delete(State(state): State<AppState>, ValidQuery(query): ValidQuery<IdQuery>) -> ApiResult<DeleteConfirmation> {
    tracing::debug!("Deleting event #{}", query.id);
    EventService::new(state.pool)
        .delete(query.id)
        .await
        .map_err(|e| reject(&format!("delete event #{}", query.id), e))?;

    tracing::debug!("Deleted event #{}", query.id);
    Ok(Json(DeleteConfirmation::new("Evento removido", query.id)))
}
