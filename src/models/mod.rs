pub mod auth;
pub mod dashboard;
pub mod denuncia;
pub mod mapa;
pub mod ponto;
