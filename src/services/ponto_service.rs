// src/services/ponto_service.rs

use std::path::PathBuf;

use crate::{
    common::error::AppError,
    db::PontoRepository,
    models::ponto::{NovoPonto, PontoColeta},
    services::fotos,
};

#[derive(Clone)]
pub struct PontoService {
    repo: PontoRepository,
    upload_dir: PathBuf,
}

impl PontoService {
    pub fn new(repo: PontoRepository, upload_dir: PathBuf) -> Self {
        Self { repo, upload_dir }
    }

    pub async fn criar(&self, novo: NovoPonto) -> Result<PontoColeta, AppError> {
        let foto_url = match novo.foto {
            Some(foto) => Some(fotos::salvar_foto(&self.upload_dir, foto).await?),
            None => None,
        };

        let ponto = self
            .repo
            .criar(
                novo.id_usuario,
                &novo.titulo,
                &novo.descricao,
                novo.tipo_residuo.as_deref(),
                novo.localizacao.as_deref(),
                novo.latitude,
                novo.longitude,
                foto_url.as_deref(),
            )
            .await?;

        tracing::info!(
            "♻️ Novo ponto de coleta #{} registrado pelo usuário {}",
            ponto.id_ponto,
            ponto.id_usuario
        );
        Ok(ponto)
    }
}
