// src/services/fotos.rs
//
// Persistência das fotos enviadas nos formulários de denúncia e de
// ponto de coleta. Os arquivos ficam no diretório de uploads com um
// nome gerado; a coluna `foto` guarda a URL relativa.

use std::path::Path;

use uuid::Uuid;

use crate::{common::error::AppError, models::denuncia::FotoUpload};

// Extensão aproveitável do nome original: só letras/dígitos, curta.
pub fn extensao_segura(nome_original: &str) -> Option<String> {
    let ext = nome_original.rsplit_once('.')?.1;
    if ext.is_empty() || ext.len() > 8 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

// Nomes aceitos em GET /uploads/{arquivo}: nada de separadores ou "..".
pub fn nome_arquivo_valido(nome: &str) -> bool {
    !nome.is_empty()
        && !nome.contains('/')
        && !nome.contains('\\')
        && !nome.contains("..")
        && nome.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_')
}

pub fn tipo_conteudo(nome: &str) -> &'static str {
    match extensao_segura(nome).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

pub async fn salvar_foto(upload_dir: &Path, foto: FotoUpload) -> Result<String, AppError> {
    let nome = match extensao_segura(&foto.nome_original) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    };

    let destino = upload_dir.join(&nome);
    tokio::fs::write(&destino, &foto.conteudo)
        .await
        .map_err(|e| anyhow::anyhow!("Falha ao gravar a foto em {:?}: {}", destino, e))?;

    Ok(format!("/uploads/{}", nome))
}

#[cfg(test)]
#[path = "fotos_test.rs"]
mod fotos_test;
