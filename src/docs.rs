// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rec'Map API",
        description = "Backend da plataforma cidadã de denúncias e pontos de coleta"
    ),
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::validar_sessao,
        handlers::auth::esqueci_senha,
        handlers::auth::redefinir_senha,

        // --- Denúncias ---
        handlers::denuncias::criar_denuncia,
        handlers::denuncias::listar_do_usuario,
        handlers::denuncias::listar_pendentes,
        handlers::validacoes::registrar_validacao,

        // --- Pontos de Coleta ---
        handlers::pontos::criar_ponto,

        // --- Mapa ---
        handlers::mapa::obter_mapa,

        // --- Governamental ---
        handlers::governamental::obter_dashboard,
        handlers::governamental::listar_denuncias,
        handlers::governamental::atualizar_status,

        // --- Relatórios ---
        handlers::relatorios::infografico,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Usuario,
            models::auth::TipoUsuario,
            models::auth::RegisterPayload,
            models::auth::LoginPayload,
            models::auth::EsqueciSenhaPayload,
            models::auth::RedefinirSenhaPayload,
            models::auth::AuthResponse,
            models::auth::MensagemResponse,

            // --- Denúncias ---
            models::denuncia::Denuncia,
            models::denuncia::DenunciaComValidacoes,
            models::denuncia::Validacao,
            models::denuncia::StatusDenuncia,
            models::denuncia::TipoValidacao,
            models::denuncia::CriarValidacaoPayload,
            models::denuncia::AtualizarStatusPayload,

            // --- Pontos / Mapa ---
            models::ponto::PontoColeta,
            models::mapa::ItemMapa,

            // --- Dashboard ---
            models::dashboard::DashboardGovernamental,
            models::dashboard::DenunciasPorMes,
            models::dashboard::DenunciasPorStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Cadastro, login e recuperação de senha"),
        (name = "Denúncias", description = "Registro e acompanhamento de denúncias"),
        (name = "Validações", description = "Votos da comunidade"),
        (name = "Pontos de Coleta", description = "Cadastro de pontos de coleta"),
        (name = "Mapa", description = "Feed combinado para o mapa"),
        (name = "Governamental", description = "Painel do gestor público"),
        (name = "Relatórios", description = "Exportações em PDF"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
