// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{ContagemMensalRow, ContagemStatusRow},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn total_denuncias(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM denuncias")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn denuncias_resolvidas(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM denuncias WHERE status = 'RESOLVIDA'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn usuarios_ativos(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM usuarios")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn pontos_de_coleta(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM pontos_coleta")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    // Série mensal dos últimos `meses` meses (meses sem dados ficam de
    // fora aqui; o serviço completa com zeros).
    pub async fn contagem_mensal(&self, meses: i32) -> Result<Vec<ContagemMensalRow>, AppError> {
        let linhas = sqlx::query_as::<_, ContagemMensalRow>(
            r#"
            SELECT
                to_char(date_trunc('month', data_criacao), 'YYYY-MM') AS mes,
                count(*) AS denuncias,
                count(*) FILTER (WHERE status = 'RESOLVIDA') AS resolvidas
            FROM denuncias
            WHERE data_criacao >= date_trunc('month', now()) - ($1 - 1) * interval '1 month'
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(meses)
        .fetch_all(&self.pool)
        .await?;
        Ok(linhas)
    }

    pub async fn contagem_por_status(&self) -> Result<Vec<ContagemStatusRow>, AppError> {
        let linhas = sqlx::query_as::<_, ContagemStatusRow>(
            "SELECT status, count(*) AS total FROM denuncias GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(linhas)
    }
}
