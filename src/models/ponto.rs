// src/models/ponto.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::denuncia::FotoUpload;

// Ponto de coleta cadastrado por um cidadão. Imutável após a criação.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct PontoColeta {
    pub id_ponto: i64,
    pub id_usuario: i64,
    pub titulo: String,
    pub descricao: String,
    pub tipo_residuo: Option<String>,
    pub localizacao: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub foto: Option<String>,
    pub data_criacao: DateTime<Utc>,
}

// Dados já extraídos do formulário multipart de POST /pontos
#[derive(Debug)]
pub struct NovoPonto {
    pub id_usuario: i64,
    pub titulo: String,
    pub descricao: String,
    pub tipo_residuo: Option<String>,
    pub localizacao: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub foto: Option<FotoUpload>,
}
