pub mod auth;
pub mod denuncias;
pub mod governamental;
pub mod mapa;
pub mod pontos;
pub mod relatorios;
pub mod uploads;
pub mod validacoes;
