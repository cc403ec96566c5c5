// src/models/dashboard.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::denuncia::StatusDenuncia;

// 1. Os cards do topo + as séries dos gráficos, tudo em uma resposta
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardGovernamental {
    pub total_denuncias: i64,
    pub denuncias_resolvidas: i64,
    pub taxa_resolucao: f64, // percentual 0..100
    pub usuarios_ativos: i64,
    pub pontos_de_coleta: i64,
    pub denuncias_por_mes: Vec<DenunciasPorMes>,
    pub denuncias_por_status: Vec<DenunciasPorStatus>,
}

// 2. Gráfico de barras "Denúncias por Mês"
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DenunciasPorMes {
    pub mes: String, // YYYY-MM
    pub denuncias: i64,
    pub resolvidas: i64,
}

// 3. Distribuição por status
#[derive(Debug, Serialize, ToSchema)]
pub struct DenunciasPorStatus {
    pub status: StatusDenuncia,
    pub total: i64,
}

// Linhas cruas vindas do SQL (agregações podem vir nulas)
#[derive(Debug, FromRow)]
pub struct ContagemMensalRow {
    pub mes: Option<String>, // to_char(data_criacao, 'YYYY-MM')
    pub denuncias: Option<i64>,
    pub resolvidas: Option<i64>,
}

#[derive(Debug, FromRow)]
pub struct ContagemStatusRow {
    pub status: StatusDenuncia,
    pub total: Option<i64>,
}
