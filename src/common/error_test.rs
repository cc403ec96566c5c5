use super::*;

#[test]
fn fk_de_usuario_vira_usuario_nao_encontrado() {
    for constraint in [
        "denuncias_id_usuario_fkey",
        "validacoes_id_usuario_fkey",
        "pontos_coleta_id_usuario_fkey",
    ] {
        assert!(matches!(
            AppError::erro_para_constraint(constraint),
            Some(AppError::UsuarioNaoEncontrado)
        ));
    }
}

#[test]
fn fk_de_denuncia_vira_denuncia_nao_encontrada() {
    assert!(matches!(
        AppError::erro_para_constraint("validacoes_id_denuncia_fkey"),
        Some(AppError::DenunciaNaoEncontrada)
    ));
}

#[test]
fn outras_constraints_nao_sao_traduzidas() {
    assert!(AppError::erro_para_constraint("usuarios_email_key").is_none());
    assert!(AppError::erro_para_constraint("").is_none());
}
