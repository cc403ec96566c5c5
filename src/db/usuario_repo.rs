// src/db/usuario_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::auth::{TipoUsuario, Usuario},
};

// O repositório de usuários, responsável por todas as interações com a
// tabela 'usuarios'
#[derive(Clone)]
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn buscar_por_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    // Busca um usuário pelo seu ID
    pub async fn buscar_por_id(&self, id: i64) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id_usuario = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    // Cria um novo usuário, com tratamento de erro específico para
    // e-mails duplicados.
    pub async fn criar(
        &self,
        nome: &str,
        email: &str,
        senha_hash: &str,
        tipo_usuario: TipoUsuario,
    ) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nome, email, senha_hash, tipo_usuario)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(email)
        .bind(senha_hash)
        .bind(tipo_usuario)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailJaExiste;
                }
            }
            e.into()
        })
    }

    // Troca a senha (usado no fluxo de recuperação)
    pub async fn atualizar_senha(&self, id: i64, senha_hash: &str) -> Result<(), AppError> {
        let resultado = sqlx::query(
            "UPDATE usuarios SET senha_hash = $2, atualizado_em = now() WHERE id_usuario = $1",
        )
        .bind(id)
        .bind(senha_hash)
        .execute(&self.pool)
        .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::UsuarioNaoEncontrado);
        }
        Ok(())
    }
}
