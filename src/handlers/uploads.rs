// src/handlers/uploads.rs

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{common::error::AppError, config::AppState, services::fotos};

// GET /uploads/{arquivo} - serve as fotos gravadas pelos formulários.
// O nome é validado antes de tocar o sistema de arquivos.
pub async fn servir_foto(
    State(app_state): State<AppState>,
    Path(arquivo): Path<String>,
) -> Result<Response, AppError> {
    if !fotos::nome_arquivo_valido(&arquivo) {
        return Err(AppError::ArquivoNaoEncontrado);
    }

    let caminho = app_state.upload_dir.join(&arquivo);
    let conteudo = tokio::fs::read(&caminho)
        .await
        .map_err(|_| AppError::ArquivoNaoEncontrado)?;

    let headers = [(header::CONTENT_TYPE, fotos::tipo_conteudo(&arquivo))];
    Ok((headers, conteudo).into_response())
}
