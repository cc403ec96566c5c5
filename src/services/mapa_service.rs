// src/services/mapa_service.rs

use std::collections::HashSet;

use crate::{
    common::error::AppError,
    db::{DenunciaRepository, PontoRepository},
    models::{denuncia::Denuncia, mapa::ItemMapa, ponto::PontoColeta},
};

// Denúncia sem coordenadas não vira marcador.
pub fn item_de_denuncia(d: Denuncia) -> Option<ItemMapa> {
    let (latitude, longitude) = (d.latitude?, d.longitude?);
    Some(ItemMapa::Denuncia {
        id: d.id_denuncia,
        titulo: d.titulo,
        descricao: d.descricao,
        latitude,
        longitude,
        status: d.status,
        foto: d.foto,
    })
}

pub fn item_de_ponto(p: PontoColeta) -> Option<ItemMapa> {
    let (latitude, longitude) = (p.latitude?, p.longitude?);
    Some(ItemMapa::Ponto {
        id: p.id_ponto,
        titulo: p.titulo,
        descricao: p.descricao,
        tipo_residuo: p.tipo_residuo,
        latitude,
        longitude,
        foto: p.foto,
    })
}

// Exatamente um marcador por (tipo, id); o primeiro prevalece.
pub fn deduplicar(itens: Vec<ItemMapa>) -> Vec<ItemMapa> {
    let mut vistos = HashSet::new();
    itens
        .into_iter()
        .filter(|item| vistos.insert(item.chave()))
        .collect()
}

#[derive(Clone)]
pub struct MapaService {
    denuncia_repo: DenunciaRepository,
    ponto_repo: PontoRepository,
}

impl MapaService {
    pub fn new(denuncia_repo: DenunciaRepository, ponto_repo: PontoRepository) -> Self {
        Self { denuncia_repo, ponto_repo }
    }

    // O feed combinado que o mapa consome: denúncias + pontos, um
    // marcador por identificador.
    pub async fn montar_feed(&self) -> Result<Vec<ItemMapa>, AppError> {
        let denuncias = self.denuncia_repo.listar_todas().await?;
        let pontos = self.ponto_repo.listar_todos().await?;

        let itens: Vec<ItemMapa> = denuncias
            .into_iter()
            .filter_map(item_de_denuncia)
            .chain(pontos.into_iter().filter_map(item_de_ponto))
            .collect();

        Ok(deduplicar(itens))
    }
}

#[cfg(test)]
#[path = "mapa_service_test.rs"]
mod mapa_service_test;
