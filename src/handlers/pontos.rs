// src/handlers/pontos.rs

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        denuncia::FotoUpload,
        ponto::{NovoPonto, PontoColeta},
    },
};

// POST /pontos - cadastro de ponto de coleta (multipart, foto opcional)
#[utoipa::path(
    post,
    path = "/pontos",
    tag = "Pontos de Coleta",
    responses(
        (status = 201, description = "Ponto de coleta registrado", body = PontoColeta),
        (status = 400, description = "Campo obrigatório ausente ou formulário inválido")
    )
)]
pub async fn criar_ponto(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let novo = extrair_novo_ponto(multipart).await?;
    let ponto = app_state.ponto_service.criar(novo).await?;
    Ok((StatusCode::CREATED, Json(ponto)))
}

async fn extrair_novo_ponto(mut multipart: Multipart) -> Result<NovoPonto, AppError> {
    let mut id_usuario = None;
    let mut titulo = None;
    let mut descricao = None;
    let mut tipo_residuo = None;
    let mut localizacao = None;
    let mut latitude = None;
    let mut longitude = None;
    let mut foto = None;

    while let Some(field) = multipart.next_field().await? {
        let nome = field.name().unwrap_or_default().to_string();
        match nome.as_str() {
            "id_usuario" => {
                id_usuario = field.text().await?.trim().parse::<i64>().ok();
            }
            "titulo" => titulo = Some(field.text().await?),
            "descricao" => descricao = Some(field.text().await?),
            "tipo_residuo" => {
                let valor = field.text().await?;
                if !valor.trim().is_empty() {
                    tipo_residuo = Some(valor);
                }
            }
            "localizacao" => {
                let valor = field.text().await?;
                if !valor.trim().is_empty() {
                    localizacao = Some(valor);
                }
            }
            "latitude" => latitude = field.text().await?.trim().parse::<f64>().ok(),
            "longitude" => longitude = field.text().await?.trim().parse::<f64>().ok(),
            "foto" => {
                let nome_original = field.file_name().unwrap_or_default().to_string();
                let conteudo = field.bytes().await?.to_vec();
                if !conteudo.is_empty() {
                    foto = Some(FotoUpload { nome_original, conteudo });
                }
            }
            _ => {}
        }
    }

    Ok(NovoPonto {
        id_usuario: id_usuario.ok_or_else(|| AppError::CampoObrigatorio("id_usuario".into()))?,
        titulo: titulo
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::CampoObrigatorio("titulo".into()))?,
        descricao: descricao
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::CampoObrigatorio("descricao".into()))?,
        tipo_residuo,
        localizacao,
        latitude,
        longitude,
        foto,
    })
}
