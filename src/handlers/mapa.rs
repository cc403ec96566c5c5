// src/handlers/mapa.rs

use axum::{extract::State, Json};

use crate::{common::error::AppError, config::AppState, models::mapa::ItemMapa};

// GET /mapa - feed combinado de denúncias e pontos para o mapa.
// Endpoint público: o front consulta em intervalos fixos.
#[utoipa::path(
    get,
    path = "/mapa",
    tag = "Mapa",
    responses(
        (status = 200, description = "Um marcador por (tipo, id), só itens com coordenadas", body = Vec<ItemMapa>)
    )
)]
pub async fn obter_mapa(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ItemMapa>>, AppError> {
    let itens = app_state.mapa_service.montar_feed().await?;
    Ok(Json(itens))
}
