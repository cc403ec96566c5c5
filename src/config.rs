// src/config.rs

use std::{env, path::PathBuf, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{DashboardRepository, DenunciaRepository, PontoRepository, UsuarioRepository},
    services::{
        auth::AuthService, dashboard_service::DashboardService,
        denuncia_service::DenunciaService, mapa_service::MapaService,
        ponto_service::PontoService, relatorio_service::RelatorioService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub upload_dir: PathBuf,
    pub auth_service: AuthService,
    pub denuncia_service: DenunciaService,
    pub ponto_service: PontoService,
    pub mapa_service: MapaService,
    pub dashboard_service: DashboardService,
    pub relatorio_service: RelatorioService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let upload_dir =
            PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));
        let url_publica = env::var("APP_PUBLIC_URL").ok();

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let usuario_repo = UsuarioRepository::new(db_pool.clone());
        let denuncia_repo = DenunciaRepository::new(db_pool.clone());
        let ponto_repo = PontoRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(usuario_repo, jwt_secret);
        let denuncia_service =
            DenunciaService::new(denuncia_repo.clone(), db_pool.clone(), upload_dir.clone());
        let ponto_service = PontoService::new(ponto_repo.clone(), upload_dir.clone());
        let mapa_service = MapaService::new(denuncia_repo, ponto_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);
        let relatorio_service = RelatorioService::new(dashboard_service.clone(), url_publica);

        Ok(Self {
            db_pool,
            upload_dir,
            auth_service,
            denuncia_service,
            ponto_service,
            mapa_service,
            dashboard_service,
            relatorio_service,
        })
    }
}
