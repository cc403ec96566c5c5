use chrono::Utc;

use super::*;
use crate::models::denuncia::StatusDenuncia;

fn denuncia(id: i64, coords: Option<(f64, f64)>) -> Denuncia {
    Denuncia {
        id_denuncia: id,
        id_usuario: 1,
        titulo: format!("Denúncia {}", id),
        descricao: "Descarte irregular".to_owned(),
        localizacao: None,
        latitude: coords.map(|c| c.0),
        longitude: coords.map(|c| c.1),
        foto: None,
        status: StatusDenuncia::Pendente,
        data_criacao: Utc::now(),
    }
}

fn ponto(id: i64) -> PontoColeta {
    PontoColeta {
        id_ponto: id,
        id_usuario: 1,
        titulo: format!("Ponto {}", id),
        descricao: "Ecoestação".to_owned(),
        tipo_residuo: Some("reciclavel".to_owned()),
        localizacao: None,
        latitude: Some(-8.05),
        longitude: Some(-34.88),
        foto: None,
        data_criacao: Utc::now(),
    }
}

#[test]
fn denuncia_sem_coordenadas_nao_vira_marcador() {
    assert!(item_de_denuncia(denuncia(1, None)).is_none());
    assert!(item_de_denuncia(denuncia(1, Some((-8.0, -34.9)))).is_some());
}

#[test]
fn deduplicar_mantem_um_marcador_por_identificador() {
    let itens: Vec<ItemMapa> = vec![
        item_de_denuncia(denuncia(1, Some((-8.0, -34.9)))).unwrap(),
        item_de_denuncia(denuncia(1, Some((-8.1, -34.8)))).unwrap(),
        item_de_denuncia(denuncia(2, Some((-8.2, -34.7)))).unwrap(),
    ];

    let resultado = deduplicar(itens);
    assert_eq!(resultado.len(), 2);
    assert_eq!(resultado[0].chave(), ("denuncia", 1));
    assert_eq!(resultado[1].chave(), ("denuncia", 2));
}

#[test]
fn denuncia_e_ponto_com_mesmo_id_sao_marcadores_distintos() {
    let itens = vec![
        item_de_denuncia(denuncia(7, Some((-8.0, -34.9)))).unwrap(),
        item_de_ponto(ponto(7)).unwrap(),
    ];

    let resultado = deduplicar(itens);
    assert_eq!(resultado.len(), 2);
}

#[test]
fn deduplicar_preserva_a_ordem_de_chegada() {
    let itens = vec![
        item_de_ponto(ponto(3)).unwrap(),
        item_de_denuncia(denuncia(1, Some((-8.0, -34.9)))).unwrap(),
        item_de_ponto(ponto(3)).unwrap(),
    ];

    let resultado = deduplicar(itens);
    let chaves: Vec<_> = resultado.iter().map(|i| i.chave()).collect();
    assert_eq!(chaves, vec![("ponto", 3), ("denuncia", 1)]);
}
