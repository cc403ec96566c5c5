// src/models/mapa.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::denuncia::StatusDenuncia;

// Um item do feed combinado de GET /mapa. A tag `tipo` é o discriminador
// que o mapa do front-end usa para escolher a cor do marcador.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "tipo", rename_all = "lowercase")]
pub enum ItemMapa {
    Denuncia {
        id: i64,
        titulo: String,
        descricao: String,
        latitude: f64,
        longitude: f64,
        status: StatusDenuncia,
        foto: Option<String>,
    },
    Ponto {
        id: i64,
        titulo: String,
        descricao: String,
        tipo_residuo: Option<String>,
        latitude: f64,
        longitude: f64,
        foto: Option<String>,
    },
}

impl ItemMapa {
    // Chave de unicidade do feed: um marcador por (tipo, id).
    pub fn chave(&self) -> (&'static str, i64) {
        match self {
            ItemMapa::Denuncia { id, .. } => ("denuncia", *id),
            ItemMapa::Ponto { id, .. } => ("ponto", *id),
        }
    }
}
