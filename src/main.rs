// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::{auth_guard, governo_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    tokio::fs::create_dir_all(&app_state.upload_dir)
        .await
        .expect("Falha ao criar o diretório de uploads.");

    // Rotas de autenticação (públicas)
    let auth_publicas = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/forgot-password", post(handlers::auth::esqueci_senha))
        .route("/reset-password", post(handlers::auth::redefinir_senha));

    // Validação de sessão (protegida pelo middleware)
    let auth_protegidas = Router::new()
        .route("/validate", get(handlers::auth::validar_sessao))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // O front envia o id_usuario no próprio formulário; as rotas de
    // cidadão são públicas como no contrato original.
    let denuncia_routes = Router::new()
        .route("/", post(handlers::denuncias::criar_denuncia))
        .route("/usuario/{id}", get(handlers::denuncias::listar_do_usuario))
        .route("/pendentes/{id}", get(handlers::denuncias::listar_pendentes));

    // Painel do gestor público: exige token + perfil GOVERNAMENTAL
    let governamental_routes = Router::new()
        .route("/dashboard", get(handlers::governamental::obter_dashboard))
        .route("/denuncias", get(handlers::governamental::listar_denuncias))
        .route(
            "/denuncias/{id}/status",
            patch(handlers::governamental::atualizar_status),
        )
        .layer(axum_middleware::from_fn(governo_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let relatorio_routes = Router::new()
        .route("/infografico", get(handlers::relatorios::infografico))
        .layer(axum_middleware::from_fn(governo_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/mapa", get(handlers::mapa::obter_mapa))
        .route("/pontos", post(handlers::pontos::criar_ponto))
        .route("/validacoes", post(handlers::validacoes::registrar_validacao))
        .route("/uploads/{arquivo}", get(handlers::uploads::servir_foto))
        .nest("/auth", auth_publicas.merge(auth_protegidas))
        .nest("/denuncias", denuncia_routes)
        .nest("/governamental", governamental_routes)
        .nest("/relatorios", relatorio_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
