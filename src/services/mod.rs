pub mod auth;
pub mod dashboard_service;
pub mod denuncia_service;
pub mod fotos;
pub mod mapa_service;
pub mod ponto_service;
pub mod relatorio_service;
