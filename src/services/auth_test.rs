use super::*;

const SEGREDO: &str = "segredo-de-teste";

#[test]
fn email_institucional_reconhece_dominio_gov() {
    assert!(email_institucional("maria@prefeitura.recife.gov.br"));
    assert!(email_institucional("  JOAO@RECIFE.GOV.BR  "));
    assert!(!email_institucional("maria@exemplo.com"));
    assert!(!email_institucional("maria@gov.br.exemplo.com"));
}

#[test]
fn cadastro_governamental_exige_email_institucional() {
    assert!(verificar_email_para_tipo(TipoUsuario::Governamental, "g@recife.gov.br").is_ok());
    assert!(matches!(
        verificar_email_para_tipo(TipoUsuario::Governamental, "g@exemplo.com"),
        Err(AppError::EmailInstitucionalObrigatorio)
    ));
}

#[test]
fn cadastro_cidadao_rejeita_email_institucional() {
    assert!(verificar_email_para_tipo(TipoUsuario::Cidadao, "c@exemplo.com").is_ok());
    assert!(matches!(
        verificar_email_para_tipo(TipoUsuario::Cidadao, "c@recife.gov.br"),
        Err(AppError::EmailInstitucionalNaoPermitido)
    ));
}

#[test]
fn token_de_sessao_roda_ida_e_volta() {
    let token = gerar_token_sessao(SEGREDO, 42).unwrap();
    assert_eq!(decodificar_token_sessao(SEGREDO, &token).unwrap(), 42);
}

#[test]
fn token_de_sessao_rejeita_segredo_errado() {
    let token = gerar_token_sessao(SEGREDO, 42).unwrap();
    assert!(matches!(
        decodificar_token_sessao("outro-segredo", &token),
        Err(AppError::TokenInvalido)
    ));
}

#[test]
fn token_de_recuperacao_roda_ida_e_volta() {
    let token = gerar_token_recuperacao(SEGREDO, 7).unwrap();
    assert_eq!(decodificar_token_recuperacao(SEGREDO, &token).unwrap(), 7);
}

#[test]
fn token_de_sessao_nao_serve_para_recuperacao() {
    let token = gerar_token_sessao(SEGREDO, 7).unwrap();
    assert!(matches!(
        decodificar_token_recuperacao(SEGREDO, &token),
        Err(AppError::TokenInvalido)
    ));
}

#[test]
fn token_corrompido_e_rejeitado() {
    assert!(matches!(
        decodificar_token_sessao(SEGREDO, "nao-e-um-jwt"),
        Err(AppError::TokenInvalido)
    ));
}
