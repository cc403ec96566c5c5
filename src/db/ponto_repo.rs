// src/db/ponto_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::ponto::PontoColeta};

#[derive(Clone)]
pub struct PontoRepository {
    pool: PgPool,
}

impl PontoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(
        &self,
        id_usuario: i64,
        titulo: &str,
        descricao: &str,
        tipo_residuo: Option<&str>,
        localizacao: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        foto: Option<&str>,
    ) -> Result<PontoColeta, AppError> {
        let ponto = sqlx::query_as::<_, PontoColeta>(
            r#"
            INSERT INTO pontos_coleta
                (id_usuario, titulo, descricao, tipo_residuo, localizacao, latitude, longitude, foto)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id_usuario)
        .bind(titulo)
        .bind(descricao)
        .bind(tipo_residuo)
        .bind(localizacao)
        .bind(latitude)
        .bind(longitude)
        .bind(foto)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::de_violacao_fk)?;
        Ok(ponto)
    }

    pub async fn listar_todos(&self) -> Result<Vec<PontoColeta>, AppError> {
        let pontos = sqlx::query_as::<_, PontoColeta>(
            "SELECT * FROM pontos_coleta ORDER BY data_criacao DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(pontos)
    }
}
