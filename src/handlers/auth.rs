// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{
        AuthResponse, EsqueciSenhaPayload, LoginPayload, MensagemResponse, RedefinirSenhaPayload,
        RegisterPayload, Usuario,
    },
};

// POST /auth/register
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Usuário cadastrado", body = AuthResponse),
        (status = 400, description = "Dados inválidos ou e-mail incompatível com o tipo de acesso"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let (token, usuario) = app_state.auth_service.registrar(&payload).await?;
    Ok((StatusCode::CREATED, Json(AuthResponse { token, usuario })))
}

// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login realizado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let (token, usuario) = app_state
        .auth_service
        .login(&payload.email, &payload.senha)
        .await?;
    Ok(Json(AuthResponse { token, usuario }))
}

// GET /auth/validate - rota protegida, usada pelo front para restaurar
// a sessão após um reload.
#[utoipa::path(
    get,
    path = "/auth/validate",
    tag = "Auth",
    responses(
        (status = 200, description = "Sessão válida", body = Usuario),
        (status = 401, description = "Token inválido ou expirado")
    ),
    security(("api_jwt" = []))
)]
pub async fn validar_sessao(AuthenticatedUser(usuario): AuthenticatedUser) -> Json<Usuario> {
    Json(usuario)
}

// POST /auth/forgot-password
#[utoipa::path(
    post,
    path = "/auth/forgot-password",
    tag = "Auth",
    request_body = EsqueciSenhaPayload,
    responses(
        (status = 200, description = "Resposta idêntica exista ou não o e-mail", body = MensagemResponse)
    )
)]
pub async fn esqueci_senha(
    State(app_state): State<AppState>,
    Json(payload): Json<EsqueciSenhaPayload>,
) -> Result<Json<MensagemResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state.auth_service.esqueci_senha(&payload.email).await?;

    // Resposta idêntica exista ou não o e-mail
    Ok(Json(MensagemResponse {
        message: "Se o e-mail estiver cadastrado, o link de recuperação será enviado.".to_string(),
    }))
}

// POST /auth/reset-password
#[utoipa::path(
    post,
    path = "/auth/reset-password",
    tag = "Auth",
    request_body = RedefinirSenhaPayload,
    responses(
        (status = 200, description = "Senha redefinida", body = MensagemResponse),
        (status = 401, description = "Token de recuperação inválido ou expirado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn redefinir_senha(
    State(app_state): State<AppState>,
    Json(payload): Json<RedefinirSenhaPayload>,
) -> Result<Json<MensagemResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state
        .auth_service
        .redefinir_senha(&payload.token, &payload.nova_senha)
        .await?;

    Ok(Json(MensagemResponse {
        message: "Senha redefinida com sucesso.".to_string(),
    }))
}
