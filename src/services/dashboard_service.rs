// src/services/dashboard_service.rs

use std::collections::HashMap;

use chrono::{Datelike, Utc};

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{
        ContagemMensalRow, DashboardGovernamental, DenunciasPorMes, DenunciasPorStatus,
    },
};

pub const MESES_NA_SERIE: i32 = 6;

// Percentual de resolução dos cards do painel.
pub fn taxa_resolucao(total: i64, resolvidas: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    resolvidas as f64 * 100.0 / total as f64
}

// Índice absoluto de mês (ano * 12 + mês) de volta para "YYYY-MM".
fn rotulo_mes(indice: i32) -> String {
    let ano = indice.div_euclid(12);
    let mes = indice.rem_euclid(12) + 1;
    format!("{:04}-{:02}", ano, mes)
}

// O SQL só devolve os meses que têm dados; o gráfico precisa de uma
// série contínua. Completa os meses faltantes com zero, terminando no
// mês (ano, mes) informado.
pub fn completar_serie_mensal(
    linhas: Vec<ContagemMensalRow>,
    ano: i32,
    mes: u32,
    meses: i32,
) -> Vec<DenunciasPorMes> {
    let mut por_mes: HashMap<String, (i64, i64)> = HashMap::new();
    for linha in linhas {
        if let Some(rotulo) = linha.mes {
            por_mes.insert(
                rotulo,
                (linha.denuncias.unwrap_or(0), linha.resolvidas.unwrap_or(0)),
            );
        }
    }

    let indice_final = ano * 12 + (mes as i32 - 1);
    (0..meses)
        .rev()
        .map(|atras| {
            let rotulo = rotulo_mes(indice_final - atras);
            let (denuncias, resolvidas) = por_mes.get(&rotulo).copied().unwrap_or((0, 0));
            DenunciasPorMes { mes: rotulo, denuncias, resolvidas }
        })
        .collect()
}

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn montar(&self) -> Result<DashboardGovernamental, AppError> {
        let total_denuncias = self.repo.total_denuncias().await?;
        let denuncias_resolvidas = self.repo.denuncias_resolvidas().await?;
        let usuarios_ativos = self.repo.usuarios_ativos().await?;
        let pontos_de_coleta = self.repo.pontos_de_coleta().await?;

        let linhas = self.repo.contagem_mensal(MESES_NA_SERIE).await?;
        let agora = Utc::now();
        let denuncias_por_mes =
            completar_serie_mensal(linhas, agora.year(), agora.month(), MESES_NA_SERIE);

        let denuncias_por_status = self
            .repo
            .contagem_por_status()
            .await?
            .into_iter()
            .map(|linha| DenunciasPorStatus {
                status: linha.status,
                total: linha.total.unwrap_or(0),
            })
            .collect();

        Ok(DashboardGovernamental {
            total_denuncias,
            denuncias_resolvidas,
            taxa_resolucao: taxa_resolucao(total_denuncias, denuncias_resolvidas),
            usuarios_ativos,
            pontos_de_coleta,
            denuncias_por_mes,
            denuncias_por_status,
        })
    }
}

#[cfg(test)]
#[path = "dashboard_service_test.rs"]
mod dashboard_service_test;
