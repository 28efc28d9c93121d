use axum::{extract::State, Json};

use super::{reject, ApiResult};
use crate::api::person::PersonView;
use crate::api::routine_template::{RoutineTemplateForm, RoutineTemplateListView};
use crate::api::{DeleteConfirmation, IdQuery};
use crate::app::AppState;
use crate::middleware::{ValidForm, ValidQuery};
use crate::services::{NewRoutineTemplates, RoutineTemplateService};
use crate::types::split_weekdays;

/// POST /rotinapadrao - weekly templates plus a done backfill of the last 7 days
pub async fn routine_template_post(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<RoutineTemplateForm>,
) -> ApiResult<PersonView> {
    tracing::debug!("Adding routine templates '{}' to person #{}", form.diassemana, form.id_pessoa);

    let request = NewRoutineTemplates {
        id_pessoa: form.id_pessoa,
        id_evento: form.id_evento,
        weekdays: split_weekdays(&form.diassemana),
        hora: form.hora,
        data_atual: form.data_atual,
    };
    let detail = RoutineTemplateService::new(state.pool)
        .create(request)
        .await
        .map_err(|e| reject(&format!("add routine templates to person #{}", form.id_pessoa), e))?;

    tracing::debug!("Added routine templates to person #{}", form.id_pessoa);
    Ok(Json(detail.into()))
}

/// DELETE /rotinapadrao?id=
pub async fn routine_template_delete(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ApiResult<DeleteConfirmation> {
    tracing::debug!("Deleting routine template #{}", query.id);
    RoutineTemplateService::new(state.pool)
        .delete(query.id)
        .await
        .map_err(|e| reject(&format!("delete routine template #{}", query.id), e))?;

    Ok(Json(DeleteConfirmation::new("Rotina Padrão removida", query.id)))
}

/// GET /rotinaspadrao?id= - templates of one person
pub async fn routine_template_list(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ApiResult<RoutineTemplateListView> {
    tracing::debug!("Listing routine templates of person #{}", query.id);
    let templates = RoutineTemplateService::new(state.pool)
        .list_by_person(query.id)
        .await
        .map_err(|e| reject(&format!("list routine templates of person #{}", query.id), e))?;

    tracing::debug!("{} routine templates found", templates.len());
    Ok(Json(templates.into()))
}
