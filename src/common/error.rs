use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::denuncia::StatusDenuncia;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailJaExiste,

    #[error("Credenciais inválidas")]
    CredenciaisInvalidas,

    #[error("Token inválido")]
    TokenInvalido,

    #[error("Usuário não encontrado")]
    UsuarioNaoEncontrado,

    #[error("Denúncia não encontrada")]
    DenunciaNaoEncontrada,

    #[error("Arquivo não encontrado")]
    ArquivoNaoEncontrado,

    #[error("Campo obrigatório ausente: {0}")]
    CampoObrigatorio(String),

    #[error("E-mail institucional obrigatório para acesso governamental")]
    EmailInstitucionalObrigatorio,

    #[error("E-mail institucional não permitido para cadastro de cidadão")]
    EmailInstitucionalNaoPermitido,

    #[error("Autor não pode validar a própria denúncia")]
    ValidacaoPropriaDenuncia,

    #[error("Usuário já validou esta denúncia")]
    ValidacaoRepetida,

    #[error("Denúncia não está mais pendente")]
    DenunciaNaoPendente,

    #[error("Transição de status inválida: {de:?} -> {para:?}")]
    TransicaoStatusInvalida {
        de: StatusDenuncia,
        para: StatusDenuncia,
    },

    #[error("Acesso restrito a usuários governamentais")]
    AcessoNegado,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Erro ao ler formulário multipart: {0}")]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
}

impl AppError {
    // INSERTs que violam uma FK chegam como erro genérico do Postgres;
    // traduz para o 404 da entidade referenciada.
    pub fn de_violacao_fk(e: sqlx::Error) -> AppError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                let constraint = db_err.constraint().unwrap_or_default();
                if let Some(erro) = Self::erro_para_constraint(constraint) {
                    return erro;
                }
            }
        }
        e.into()
    }

    // Os nomes seguem o padrão do Postgres: <tabela>_<coluna>_fkey.
    fn erro_para_constraint(constraint: &str) -> Option<AppError> {
        if constraint.ends_with("_id_usuario_fkey") {
            Some(AppError::UsuarioNaoEncontrado)
        } else if constraint.ends_with("_id_denuncia_fkey") {
            Some(AppError::DenunciaNaoEncontrada)
        } else {
            None
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailJaExiste => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::CredenciaisInvalidas => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::TokenInvalido => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::UsuarioNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }
            AppError::DenunciaNaoEncontrada => {
                (StatusCode::NOT_FOUND, "Denúncia não encontrada.".to_string())
            }
            AppError::ArquivoNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Arquivo não encontrado.".to_string())
            }
            AppError::CampoObrigatorio(campo) => (
                StatusCode::BAD_REQUEST,
                format!("O campo '{}' é obrigatório.", campo),
            ),
            AppError::EmailInstitucionalObrigatorio => (
                StatusCode::BAD_REQUEST,
                "Para acessar como Gestor Público, use um e-mail institucional (.gov.br)."
                    .to_string(),
            ),
            AppError::EmailInstitucionalNaoPermitido => (
                StatusCode::BAD_REQUEST,
                "E-mails institucionais (.gov.br) só podem ser usados no acesso de Gestor Público."
                    .to_string(),
            ),
            AppError::ValidacaoPropriaDenuncia => (
                StatusCode::FORBIDDEN,
                "Você não pode validar a sua própria denúncia.".to_string(),
            ),
            AppError::ValidacaoRepetida => (
                StatusCode::CONFLICT,
                "Você já validou esta denúncia.".to_string(),
            ),
            AppError::DenunciaNaoPendente => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Esta denúncia não está mais pendente de validação.".to_string(),
            ),
            AppError::TransicaoStatusInvalida { de, para } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Não é possível mudar o status de {:?} para {:?}.", de, para),
            ),
            AppError::AcessoNegado => (
                StatusCode::FORBIDDEN,
                "Acesso restrito a usuários governamentais.".to_string(),
            ),
            AppError::MultipartError(e) => (
                StatusCode::BAD_REQUEST,
                format!("Formulário inválido: {}", e),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
