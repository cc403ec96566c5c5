// src/db/denuncia_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::denuncia::{Denuncia, StatusDenuncia, TipoValidacao, Validacao},
};

#[derive(Clone)]
pub struct DenunciaRepository {
    pool: PgPool,
}

impl DenunciaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(
        &self,
        id_usuario: i64,
        titulo: &str,
        descricao: &str,
        localizacao: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        foto: Option<&str>,
    ) -> Result<Denuncia, AppError> {
        let denuncia = sqlx::query_as::<_, Denuncia>(
            r#"
            INSERT INTO denuncias (id_usuario, titulo, descricao, localizacao, latitude, longitude, foto)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id_usuario)
        .bind(titulo)
        .bind(descricao)
        .bind(localizacao)
        .bind(latitude)
        .bind(longitude)
        .bind(foto)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::de_violacao_fk)?;
        Ok(denuncia)
    }

    pub async fn listar_por_usuario(&self, id_usuario: i64) -> Result<Vec<Denuncia>, AppError> {
        let denuncias = sqlx::query_as::<_, Denuncia>(
            "SELECT * FROM denuncias WHERE id_usuario = $1 ORDER BY data_criacao DESC",
        )
        .bind(id_usuario)
        .fetch_all(&self.pool)
        .await?;
        Ok(denuncias)
    }

    pub async fn listar_todas(&self) -> Result<Vec<Denuncia>, AppError> {
        let denuncias =
            sqlx::query_as::<_, Denuncia>("SELECT * FROM denuncias ORDER BY data_criacao DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(denuncias)
    }

    // A fila de validação comunitária: denúncias PENDENTES de outros
    // usuários nas quais este usuário ainda não votou.
    pub async fn listar_pendentes_para(&self, id_usuario: i64) -> Result<Vec<Denuncia>, AppError> {
        let denuncias = sqlx::query_as::<_, Denuncia>(
            r#"
            SELECT d.* FROM denuncias d
            WHERE d.status = 'PENDENTE'
              AND d.id_usuario <> $1
              AND NOT EXISTS (
                    SELECT 1 FROM validacoes v
                    WHERE v.id_denuncia = d.id_denuncia AND v.id_usuario = $1
              )
            ORDER BY d.data_criacao DESC
            "#,
        )
        .bind(id_usuario)
        .fetch_all(&self.pool)
        .await?;
        Ok(denuncias)
    }

    // Busca os votos de um conjunto de denúncias de uma vez só, para
    // montar as respostas sem N+1.
    pub async fn listar_validacoes(&self, ids: &[i64]) -> Result<Vec<Validacao>, AppError> {
        let validacoes = sqlx::query_as::<_, Validacao>(
            "SELECT * FROM validacoes WHERE id_denuncia = ANY($1) ORDER BY data_validacao",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(validacoes)
    }

    pub async fn atualizar_status(
        &self,
        id_denuncia: i64,
        status: StatusDenuncia,
    ) -> Result<Denuncia, AppError> {
        let denuncia = sqlx::query_as::<_, Denuncia>(
            "UPDATE denuncias SET status = $2 WHERE id_denuncia = $1 RETURNING *",
        )
        .bind(id_denuncia)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        denuncia.ok_or(AppError::DenunciaNaoEncontrada)
    }

    // --- Métodos usados dentro da transação de votação ---
    // Recebem um executor genérico (a transação) como o restante dos
    // repositórios faz.

    pub async fn buscar_por_id<'e, E>(
        &self,
        executor: E,
        id_denuncia: i64,
    ) -> Result<Option<Denuncia>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let denuncia =
            sqlx::query_as::<_, Denuncia>("SELECT * FROM denuncias WHERE id_denuncia = $1")
                .bind(id_denuncia)
                .fetch_optional(executor)
                .await?;
        Ok(denuncia)
    }

    // Versão com trava de linha, usada na transação de votação:
    // serializa os votantes de uma mesma denúncia para que a contagem
    // de confirmações nunca perca um voto concorrente.
    pub async fn buscar_por_id_com_trava<'e, E>(
        &self,
        executor: E,
        id_denuncia: i64,
    ) -> Result<Option<Denuncia>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let denuncia = sqlx::query_as::<_, Denuncia>(
            "SELECT * FROM denuncias WHERE id_denuncia = $1 FOR UPDATE",
        )
        .bind(id_denuncia)
        .fetch_optional(executor)
        .await?;
        Ok(denuncia)
    }

    pub async fn inserir_validacao<'e, E>(
        &self,
        executor: E,
        id_denuncia: i64,
        id_usuario: i64,
        tipo: TipoValidacao,
    ) -> Result<Validacao, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Validacao>(
            r#"
            INSERT INTO validacoes (id_denuncia, id_usuario, tipo_validacao)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(id_denuncia)
        .bind(id_usuario)
        .bind(tipo)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    // uq_validacoes_denuncia_usuario
                    return AppError::ValidacaoRepetida;
                }
            }
            AppError::de_violacao_fk(e)
        })
    }

    pub async fn contar_confirmacoes<'e, E>(
        &self,
        executor: E,
        id_denuncia: i64,
    ) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM validacoes WHERE id_denuncia = $1 AND tipo_validacao = 'CONFIRMAR'",
        )
        .bind(id_denuncia)
        .fetch_one(executor)
        .await?;
        Ok(total)
    }

    pub async fn atualizar_status_exec<'e, E>(
        &self,
        executor: E,
        id_denuncia: i64,
        status: StatusDenuncia,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE denuncias SET status = $2 WHERE id_denuncia = $1")
            .bind(id_denuncia)
            .bind(status)
            .execute(executor)
            .await?;
        Ok(())
    }
}
