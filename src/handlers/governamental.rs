// src/handlers/governamental.rs

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        dashboard::DashboardGovernamental,
        denuncia::{AtualizarStatusPayload, Denuncia, DenunciaComValidacoes},
    },
};

// GET /governamental/dashboard
#[utoipa::path(
    get,
    path = "/governamental/dashboard",
    tag = "Governamental",
    responses(
        (status = 200, description = "Indicadores agregados do painel", body = DashboardGovernamental),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Usuário não é governamental")
    ),
    security(("api_jwt" = []))
)]
pub async fn obter_dashboard(
    State(app_state): State<AppState>,
) -> Result<Json<DashboardGovernamental>, AppError> {
    let dashboard = app_state.dashboard_service.montar().await?;
    Ok(Json(dashboard))
}

// GET /governamental/denuncias
#[utoipa::path(
    get,
    path = "/governamental/denuncias",
    tag = "Governamental",
    responses(
        (status = 200, description = "Todas as denúncias, mais recentes primeiro", body = Vec<DenunciaComValidacoes>),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Usuário não é governamental")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_denuncias(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<DenunciaComValidacoes>>, AppError> {
    let denuncias = app_state.denuncia_service.listar_todas().await?;
    Ok(Json(denuncias))
}

// PATCH /governamental/denuncias/{id}/status
#[utoipa::path(
    patch,
    path = "/governamental/denuncias/{id}/status",
    tag = "Governamental",
    params(("id" = i64, Path, description = "ID da denúncia")),
    request_body = AtualizarStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = Denuncia),
        (status = 404, description = "Denúncia não encontrada"),
        (status = 422, description = "Transição de status não permitida")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar_status(
    State(app_state): State<AppState>,
    Path(id_denuncia): Path<i64>,
    Json(payload): Json<AtualizarStatusPayload>,
) -> Result<Json<Denuncia>, AppError> {
    let denuncia = app_state
        .denuncia_service
        .atualizar_status(id_denuncia, payload.status)
        .await?;
    Ok(Json(denuncia))
}
