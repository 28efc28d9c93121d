use axum::{extract::State, Json};

use super::{reject, ApiResult};
use crate::api::day_routine::{DayRoutineForm, DayRoutineListView, DayRoutineSearchForm, DayRoutineView};
use crate::api::{DeleteConfirmation, IdQuery};
use crate::app::AppState;
use crate::middleware::{ValidForm, ValidQuery};
use crate::services::{DayRoutineService, NewDayRoutine};

/// POST /rotinadia - insert, or update the done flag of the same (hora, person, event, day)
pub async fn day_routine_post(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<DayRoutineForm>,
) -> ApiResult<DayRoutineView> {
    tracing::debug!("Recording day routine for person #{}", form.id_pessoa);

    let request = NewDayRoutine {
        id_pessoa: form.id_pessoa,
        id_evento: form.id_evento,
        hora: form.hora,
        executou: form.executou,
        data_execucao: form.data_execucao,
    };
    let routine = DayRoutineService::new(state.pool)
        .upsert(request)
        .await
        .map_err(|e| reject(&format!("record day routine for person #{}", form.id_pessoa), e))?;

    tracing::debug!("Recorded day routine #{}", routine.id);
    Ok(Json(routine.into()))
}

/// DELETE /rotinadia?id=
pub async fn day_routine_delete(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ApiResult<DeleteConfirmation> {
    tracing::debug!("Deleting day routine #{}", query.id);
    DayRoutineService::new(state.pool)
        .delete(query.id)
        .await
        .map_err(|e| reject(&format!("delete day routine #{}", query.id), e))?;

    Ok(Json(DeleteConfirmation::new("Rotina Dia removida", query.id)))
}

/// POST /rotinasdia - routines on the calendar day of `data_execucao`
pub async fn day_routine_on_date(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<DayRoutineSearchForm>,
) -> ApiResult<DayRoutineListView> {
    tracing::debug!("Listing day routines of person #{} on {}", form.id_pessoa, form.data_execucao.date());
    let routines = DayRoutineService::new(state.pool)
        .list_on_date(form.id_pessoa, form.data_execucao)
        .await
        .map_err(|e| reject(&format!("list day routines of person #{}", form.id_pessoa), e))?;

    tracing::debug!("{} day routines found", routines.len());
    Ok(Json(routines.into()))
}

/// POST /rotinasdia-data - routines at or after `data_execucao`
pub async fn day_routine_since(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<DayRoutineSearchForm>,
) -> ApiResult<DayRoutineListView> {
    tracing::debug!("Listing day routines of person #{} since {}", form.id_pessoa, form.data_execucao);
    let routines = DayRoutineService::new(state.pool)
        .list_since(form.id_pessoa, form.data_execucao)
        .await
        .map_err(|e| reject(&format!("list day routines of person #{}", form.id_pessoa), e))?;

    tracing::debug!("{} day routines found", routines.len());
    Ok(Json(routines.into()))
}
