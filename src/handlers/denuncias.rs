// src/handlers/denuncias.rs

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::denuncia::{Denuncia, DenunciaComValidacoes, FotoUpload, NovaDenuncia},
};

// POST /denuncias - formulário multipart com foto opcional
#[utoipa::path(
    post,
    path = "/denuncias",
    tag = "Denúncias",
    responses(
        (status = 201, description = "Denúncia registrada", body = Denuncia),
        (status = 400, description = "Campo obrigatório ausente ou formulário inválido")
    )
)]
pub async fn criar_denuncia(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let nova = extrair_nova_denuncia(multipart).await?;
    let denuncia = app_state.denuncia_service.criar(nova).await?;
    Ok((StatusCode::CREATED, Json(denuncia)))
}

// GET /denuncias/usuario/{id} - "minhas denúncias"
#[utoipa::path(
    get,
    path = "/denuncias/usuario/{id}",
    tag = "Denúncias",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Denúncias do usuário, com validações", body = Vec<DenunciaComValidacoes>)
    )
)]
pub async fn listar_do_usuario(
    State(app_state): State<AppState>,
    Path(id_usuario): Path<i64>,
) -> Result<Json<Vec<DenunciaComValidacoes>>, AppError> {
    let denuncias = app_state
        .denuncia_service
        .listar_do_usuario(id_usuario)
        .await?;
    Ok(Json(denuncias))
}

// GET /denuncias/pendentes/{id} - fila de validação comunitária
#[utoipa::path(
    get,
    path = "/denuncias/pendentes/{id}",
    tag = "Denúncias",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Denúncias pendentes que o usuário pode validar", body = Vec<DenunciaComValidacoes>)
    )
)]
pub async fn listar_pendentes(
    State(app_state): State<AppState>,
    Path(id_usuario): Path<i64>,
) -> Result<Json<Vec<DenunciaComValidacoes>>, AppError> {
    let denuncias = app_state
        .denuncia_service
        .listar_pendentes_para(id_usuario)
        .await?;
    Ok(Json(denuncias))
}

// Lê os campos do formulário multipart na ordem em que chegam.
async fn extrair_nova_denuncia(mut multipart: Multipart) -> Result<NovaDenuncia, AppError> {
    let mut id_usuario = None;
    let mut titulo = None;
    let mut descricao = None;
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

    Ok(NovaDenuncia {
        id_usuario: id_usuario.ok_or_else(|| AppError::CampoObrigatorio("id_usuario".into()))?,
        titulo: titulo
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::CampoObrigatorio("titulo".into()))?,
        descricao: descricao
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::CampoObrigatorio("descricao".into()))?,
        localizacao,
        latitude,
        longitude,
        foto,
    })
}
