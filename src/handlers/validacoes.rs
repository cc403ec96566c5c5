// src/handlers/validacoes.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::denuncia::{CriarValidacaoPayload, Validacao},
};

// POST /validacoes - voto de confirmar/contestar de um cidadão
#[utoipa::path(
    post,
    path = "/validacoes",
    tag = "Validações",
    request_body = CriarValidacaoPayload,
    responses(
        (status = 201, description = "Voto registrado", body = Validacao),
        (status = 403, description = "Autor tentou validar a própria denúncia"),
        (status = 409, description = "Usuário já votou nesta denúncia"),
        (status = 422, description = "Denúncia não está mais pendente")
    )
)]
pub async fn registrar_validacao(
    State(app_state): State<AppState>,
    Json(payload): Json<CriarValidacaoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let validacao = app_state
        .denuncia_service
        .registrar_validacao(&payload)
        .await?;
    Ok((StatusCode::CREATED, Json(validacao)))
}
