use serde_json::json;

use super::*;

#[test]
fn voto_aceita_id_usuario_como_string() {
    let payload: CriarValidacaoPayload = serde_json::from_value(json!({
        "id_usuario": "3",
        "id_denuncia": 5,
        "tipo_validacao": "CONFIRMAR"
    }))
    .unwrap();

    assert_eq!(payload.id_usuario, 3);
    assert_eq!(payload.id_denuncia, 5);
    assert_eq!(payload.tipo_validacao, TipoValidacao::Confirmar);
}

#[test]
fn voto_aceita_id_usuario_como_numero() {
    let payload: CriarValidacaoPayload = serde_json::from_value(json!({
        "id_usuario": 3,
        "id_denuncia": 5,
        "tipo_validacao": "CONTESTAR"
    }))
    .unwrap();

    assert_eq!(payload.id_usuario, 3);
    assert_eq!(payload.tipo_validacao, TipoValidacao::Contestar);
}

#[test]
fn voto_rejeita_id_usuario_nao_numerico() {
    let resultado = serde_json::from_value::<CriarValidacaoPayload>(json!({
        "id_usuario": "abc",
        "id_denuncia": 5,
        "tipo_validacao": "CONFIRMAR"
    }));

    assert!(resultado.is_err());
}
