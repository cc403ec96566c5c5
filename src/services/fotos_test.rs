use super::*;

#[test]
fn extensao_segura_aceita_extensoes_comuns() {
    assert_eq!(extensao_segura("foto.JPG"), Some("jpg".to_owned()));
    assert_eq!(extensao_segura("lixao.na.esquina.png"), Some("png".to_owned()));
}

#[test]
fn extensao_segura_rejeita_nomes_estranhos() {
    assert_eq!(extensao_segura("semextensao"), None);
    assert_eq!(extensao_segura("foto."), None);
    assert_eq!(extensao_segura("foto.ex~o"), None);
    assert_eq!(extensao_segura("foto.extensaolonga"), None);
}

#[test]
fn nome_arquivo_valido_bloqueia_travessia_de_caminho() {
    assert!(nome_arquivo_valido("9f0c2b6e.jpg"));
    assert!(nome_arquivo_valido("foto_01-a.png"));
    assert!(!nome_arquivo_valido(""));
    assert!(!nome_arquivo_valido("../segredo.txt"));
    assert!(!nome_arquivo_valido("a/b.png"));
    assert!(!nome_arquivo_valido("a\\b.png"));
    assert!(!nome_arquivo_valido("foto..png"));
}

#[test]
fn tipo_conteudo_mapeia_extensoes_de_imagem() {
    assert_eq!(tipo_conteudo("x.jpg"), "image/jpeg");
    assert_eq!(tipo_conteudo("x.jpeg"), "image/jpeg");
    assert_eq!(tipo_conteudo("x.png"), "image/png");
    assert_eq!(tipo_conteudo("x.webp"), "image/webp");
    assert_eq!(tipo_conteudo("x.bin"), "application/octet-stream");
}
