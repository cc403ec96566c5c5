// src/handlers/relatorios.rs

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{common::error::AppError, config::AppState};

// GET /relatorios/infografico - PDF para download
#[utoipa::path(
    get,
    path = "/relatorios/infografico",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Infográfico em PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Usuário não é governamental")
    ),
    security(("api_jwt" = []))
)]
pub async fn infografico(State(app_state): State<AppState>) -> Result<Response, AppError> {
    let pdf_bytes = app_state.relatorio_service.gerar_infografico().await?;

    // Configura os headers para o navegador baixar o PDF
    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"infografico_recmap.pdf\"",
        ),
    ];

    Ok((headers, pdf_bytes).into_response())
}
