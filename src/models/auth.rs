// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Perfil de acesso do usuário. O front-end diferencia "Cidadão" de
// "Gestor Público" por este campo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_usuario", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoUsuario {
    Cidadao,
    Governamental,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Usuario {
    pub id_usuario: i64,
    pub nome: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub senha_hash: String,

    pub tipo_usuario: TipoUsuario,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterPayload {
    #[validate(length(min = 3, message = "O nome deve ter no mínimo 3 caracteres."))]
    pub nome: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
    pub tipo_usuario: TipoUsuario,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

// Recuperação de senha: primeiro passo (envio do link)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EsqueciSenhaPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
}

// Recuperação de senha: segundo passo (o front envia `novaSenha`)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RedefinirSenhaPayload {
    pub token: String,
    #[serde(rename = "novaSenha")]
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub nova_senha: String,
}

// Resposta de autenticação com o token e o usuário logado
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub usuario: Usuario,
}

// Resposta genérica de mensagem (forgot/reset)
#[derive(Debug, Serialize, ToSchema)]
pub struct MensagemResponse {
    pub message: String,
}

// Estrutura de dados ("claims") dentro do JWT de sessão
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// Claims do token de recuperação de senha. O campo `acao` impede que um
// token de sessão seja aceito no reset.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecuperacaoClaims {
    pub sub: i64,
    pub exp: usize,
    pub iat: usize,
    pub acao: String,
}
