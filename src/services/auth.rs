// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::UsuarioRepository,
    models::auth::{Claims, RecuperacaoClaims, RegisterPayload, TipoUsuario, Usuario},
};

const ACAO_RECUPERACAO: &str = "recuperar-senha";

// Um e-mail é institucional quando pertence ao domínio .gov.br
pub fn email_institucional(email: &str) -> bool {
    email.trim().to_lowercase().ends_with(".gov.br")
}

// Regra de cadastro: gestor público exige e-mail institucional e
// cidadão não pode usar um.
pub fn verificar_email_para_tipo(tipo: TipoUsuario, email: &str) -> Result<(), AppError> {
    let institucional = email_institucional(email);
    match tipo {
        TipoUsuario::Governamental if !institucional => Err(AppError::EmailInstitucionalObrigatorio),
        TipoUsuario::Cidadao if institucional => Err(AppError::EmailInstitucionalNaoPermitido),
        _ => Ok(()),
    }
}

// Token de sessão: 7 dias
pub fn gerar_token_sessao(jwt_secret: &str, id_usuario: i64) -> Result<String, AppError> {
    let agora = Utc::now();
    let expira_em = agora + chrono::Duration::days(7);

    let claims = Claims {
        sub: id_usuario,
        exp: expira_em.timestamp() as usize,
        iat: agora.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

pub fn decodificar_token_sessao(jwt_secret: &str, token: &str) -> Result<i64, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::TokenInvalido)?;
    Ok(token_data.claims.sub)
}

// Token de recuperação de senha: 30 minutos, marcado com `acao` para
// que um token de sessão não sirva no reset.
pub fn gerar_token_recuperacao(jwt_secret: &str, id_usuario: i64) -> Result<String, AppError> {
    let agora = Utc::now();
    let expira_em = agora + chrono::Duration::minutes(30);

    let claims = RecuperacaoClaims {
        sub: id_usuario,
        exp: expira_em.timestamp() as usize,
        iat: agora.timestamp() as usize,
        acao: ACAO_RECUPERACAO.to_string(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

pub fn decodificar_token_recuperacao(jwt_secret: &str, token: &str) -> Result<i64, AppError> {
    let token_data = decode::<RecuperacaoClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::TokenInvalido)?;

    if token_data.claims.acao != ACAO_RECUPERACAO {
        return Err(AppError::TokenInvalido);
    }
    Ok(token_data.claims.sub)
}

#[derive(Clone)]
pub struct AuthService {
    repo: UsuarioRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(repo: UsuarioRepository, jwt_secret: String) -> Self {
        Self { repo, jwt_secret }
    }

    pub async fn registrar(&self, payload: &RegisterPayload) -> Result<(String, Usuario), AppError> {
        let email = payload.email.trim().to_lowercase();
        verificar_email_para_tipo(payload.tipo_usuario, &email)?;

        // Hashing em um thread separado para não bloquear o runtime
        let senha = payload.senha.clone();
        let senha_hash = tokio::task::spawn_blocking(move || hash(&senha, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let usuario = self
            .repo
            .criar(payload.nome.trim(), &email, &senha_hash, payload.tipo_usuario)
            .await?;

        let token = gerar_token_sessao(&self.jwt_secret, usuario.id_usuario)?;
        Ok((token, usuario))
    }

    pub async fn login(&self, email: &str, senha: &str) -> Result<(String, Usuario), AppError> {
        let usuario = self
            .repo
            .buscar_por_email(&email.trim().to_lowercase())
            .await?
            .ok_or(AppError::CredenciaisInvalidas)?;

        let senha = senha.to_owned();
        let senha_hash = usuario.senha_hash.clone();

        // Executa a verificação em um thread separado
        let senha_valida = tokio::task::spawn_blocking(move || verify(&senha, &senha_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_valida {
            return Err(AppError::CredenciaisInvalidas);
        }

        let token = gerar_token_sessao(&self.jwt_secret, usuario.id_usuario)?;
        Ok((token, usuario))
    }

    pub async fn validar_token(&self, token: &str) -> Result<Usuario, AppError> {
        let id_usuario = decodificar_token_sessao(&self.jwt_secret, token)?;
        self.repo
            .buscar_por_id(id_usuario)
            .await?
            .ok_or(AppError::UsuarioNaoEncontrado)
    }

    // Sempre responde com sucesso para não revelar quais e-mails existem.
    // O envio do e-mail em si é responsabilidade externa; aqui apenas
    // geramos o token e registramos o link no log.
    pub async fn esqueci_senha(&self, email: &str) -> Result<(), AppError> {
        if let Some(usuario) = self.repo.buscar_por_email(&email.trim().to_lowercase()).await? {
            let token = gerar_token_recuperacao(&self.jwt_secret, usuario.id_usuario)?;
            tracing::info!(
                "🔑 Link de recuperação para {}: /reset-password?token={}",
                usuario.email,
                token
            );
        }
        Ok(())
    }

    pub async fn redefinir_senha(&self, token: &str, nova_senha: &str) -> Result<(), AppError> {
        let id_usuario = decodificar_token_recuperacao(&self.jwt_secret, token)?;

        let senha = nova_senha.to_owned();
        let senha_hash = tokio::task::spawn_blocking(move || hash(&senha, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.repo.atualizar_senha(id_usuario, &senha_hash).await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
