use chrono::Utc;

use super::*;

fn denuncia(id: i64, autor: i64) -> Denuncia {
    Denuncia {
        id_denuncia: id,
        id_usuario: autor,
        titulo: format!("Denúncia {}", id),
        descricao: "Acúmulo de lixo".to_owned(),
        localizacao: Some("Centro".to_owned()),
        latitude: Some(-8.05),
        longitude: Some(-34.88),
        foto: None,
        status: StatusDenuncia::Pendente,
        data_criacao: Utc::now(),
    }
}

fn validacao(id: i64, id_denuncia: i64, id_usuario: i64) -> Validacao {
    Validacao {
        id_validacao: id,
        id_denuncia,
        id_usuario,
        tipo_validacao: TipoValidacao::Confirmar,
        data_validacao: Utc::now(),
    }
}

#[test]
fn promocao_acontece_a_partir_da_terceira_confirmacao() {
    assert!(!promove_apos_voto(TipoValidacao::Confirmar, 1));
    assert!(!promove_apos_voto(TipoValidacao::Confirmar, 2));
    assert!(promove_apos_voto(TipoValidacao::Confirmar, 3));
    assert!(promove_apos_voto(TipoValidacao::Confirmar, 4));
}

#[test]
fn contestacoes_nunca_promovem() {
    assert!(!promove_apos_voto(TipoValidacao::Contestar, 0));
    assert!(!promove_apos_voto(TipoValidacao::Contestar, 5));
}

#[test]
fn encaminhar_e_permitido_de_pendente_e_validada() {
    assert!(transicao_permitida(StatusDenuncia::Pendente, StatusDenuncia::Encaminhada));
    assert!(transicao_permitida(StatusDenuncia::Validada, StatusDenuncia::Encaminhada));
}

#[test]
fn resolver_exige_denuncia_encaminhada() {
    assert!(transicao_permitida(StatusDenuncia::Encaminhada, StatusDenuncia::Resolvida));
    assert!(!transicao_permitida(StatusDenuncia::Pendente, StatusDenuncia::Resolvida));
    assert!(!transicao_permitida(StatusDenuncia::Validada, StatusDenuncia::Resolvida));
}

#[test]
fn resolvida_e_terminal() {
    for para in [
        StatusDenuncia::Pendente,
        StatusDenuncia::Validada,
        StatusDenuncia::Encaminhada,
        StatusDenuncia::Resolvida,
    ] {
        assert!(!transicao_permitida(StatusDenuncia::Resolvida, para));
    }
}

#[test]
fn nao_ha_transicao_para_o_mesmo_status() {
    for status in [
        StatusDenuncia::Pendente,
        StatusDenuncia::Validada,
        StatusDenuncia::Encaminhada,
    ] {
        assert!(!transicao_permitida(status, status));
    }
}

#[test]
fn agrupar_validacoes_junta_votos_na_denuncia_certa() {
    let denuncias = vec![denuncia(1, 10), denuncia(2, 11)];
    let validacoes = vec![validacao(100, 2, 12), validacao(101, 2, 13), validacao(102, 1, 14)];

    let resultado = agrupar_validacoes(denuncias, validacoes);

    assert_eq!(resultado.len(), 2);
    assert_eq!(resultado[0].denuncia.id_denuncia, 1);
    assert_eq!(resultado[0].validacoes.len(), 1);
    assert_eq!(resultado[1].denuncia.id_denuncia, 2);
    assert_eq!(resultado[1].validacoes.len(), 2);
}

#[test]
fn agrupar_validacoes_sem_votos_gera_lista_vazia() {
    let resultado = agrupar_validacoes(vec![denuncia(1, 10)], Vec::new());
    assert_eq!(resultado.len(), 1);
    assert!(resultado[0].validacoes.is_empty());
}
