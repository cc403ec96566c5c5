pub mod usuario_repo;
pub use usuario_repo::UsuarioRepository;
pub mod denuncia_repo;
pub use denuncia_repo::DenunciaRepository;
pub mod ponto_repo;
pub use ponto_repo::PontoRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
