// src/models/denuncia.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// Ciclo de vida de uma denúncia:
// PENDENTE -> VALIDADA (pela comunidade) -> ENCAMINHADA -> RESOLVIDA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_denuncia", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDenuncia {
    Pendente,
    Validada,
    Encaminhada,
    Resolvida,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_validacao", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoValidacao {
    Confirmar,
    Contestar,
}

// Representa uma denúncia vinda do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Denuncia {
    pub id_denuncia: i64,
    pub id_usuario: i64,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub foto: Option<String>,
    pub status: StatusDenuncia,
    pub data_criacao: DateTime<Utc>,
}

// Voto da comunidade sobre uma denúncia
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Validacao {
    pub id_validacao: i64,
    pub id_denuncia: i64,
    pub id_usuario: i64,
    pub tipo_validacao: TipoValidacao,
    pub data_validacao: DateTime<Utc>,
}

// A forma que o front-end consome: a denúncia com seus votos embutidos.
#[derive(Debug, Serialize, ToSchema)]
pub struct DenunciaComValidacoes {
    #[serde(flatten)]
    pub denuncia: Denuncia,
    pub validacoes: Vec<Validacao>,
}

// Dados já extraídos do formulário multipart de POST /denuncias
#[derive(Debug)]
pub struct NovaDenuncia {
    pub id_usuario: i64,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub foto: Option<FotoUpload>,
}

// Foto enviada em um formulário multipart, ainda em memória
#[derive(Debug)]
pub struct FotoUpload {
    pub nome_original: String,
    pub conteudo: Vec<u8>,
}

// O front guarda o id do usuário logado como string (vem do
// localStorage) e o envia assim mesmo no corpo do voto.
fn id_numero_ou_texto<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Valor {
        Numero(i64),
        Texto(String),
    }

    match Valor::deserialize(deserializer)? {
        Valor::Numero(n) => Ok(n),
        Valor::Texto(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CriarValidacaoPayload {
    #[serde(deserialize_with = "id_numero_ou_texto")]
    pub id_usuario: i64,
    pub id_denuncia: i64,
    pub tipo_validacao: TipoValidacao,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AtualizarStatusPayload {
    pub status: StatusDenuncia,
}

#[cfg(test)]
#[path = "denuncia_test.rs"]
mod denuncia_test;
