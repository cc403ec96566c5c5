// src/services/denuncia_service.rs

use std::collections::HashMap;
use std::path::PathBuf;

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::DenunciaRepository,
    models::denuncia::{
        CriarValidacaoPayload, Denuncia, DenunciaComValidacoes, NovaDenuncia, StatusDenuncia,
        TipoValidacao, Validacao,
    },
    services::fotos,
};

// Quantos votos CONFIRMAR promovem uma denúncia a VALIDADA
pub const CONFIRMACOES_PARA_VALIDAR: i64 = 3;

// A contagem já inclui o voto recém-inserido quando a decisão é tomada.
pub fn promove_apos_voto(tipo: TipoValidacao, confirmacoes: i64) -> bool {
    tipo == TipoValidacao::Confirmar && confirmacoes >= CONFIRMACOES_PARA_VALIDAR
}

// As únicas transições que o painel governamental oferece:
// encaminhar (de PENDENTE ou VALIDADA) e resolver (de ENCAMINHADA).
// RESOLVIDA é terminal.
pub fn transicao_permitida(de: StatusDenuncia, para: StatusDenuncia) -> bool {
    matches!(
        (de, para),
        (StatusDenuncia::Pendente, StatusDenuncia::Encaminhada)
            | (StatusDenuncia::Validada, StatusDenuncia::Encaminhada)
            | (StatusDenuncia::Encaminhada, StatusDenuncia::Resolvida)
    )
}

// Junta cada denúncia com os seus votos, preservando a ordem da lista.
pub fn agrupar_validacoes(
    denuncias: Vec<Denuncia>,
    validacoes: Vec<Validacao>,
) -> Vec<DenunciaComValidacoes> {
    let mut por_denuncia: HashMap<i64, Vec<Validacao>> = HashMap::new();
    for v in validacoes {
        por_denuncia.entry(v.id_denuncia).or_default().push(v);
    }

    denuncias
        .into_iter()
        .map(|d| {
            let validacoes = por_denuncia.remove(&d.id_denuncia).unwrap_or_default();
            DenunciaComValidacoes { denuncia: d, validacoes }
        })
        .collect()
}

#[derive(Clone)]
pub struct DenunciaService {
    repo: DenunciaRepository,
    pool: PgPool,
    upload_dir: PathBuf,
}

impl DenunciaService {
    pub fn new(repo: DenunciaRepository, pool: PgPool, upload_dir: PathBuf) -> Self {
        Self { repo, pool, upload_dir }
    }

    pub async fn criar(&self, nova: NovaDenuncia) -> Result<Denuncia, AppError> {
        let foto_url = match nova.foto {
            Some(foto) => Some(fotos::salvar_foto(&self.upload_dir, foto).await?),
            None => None,
        };

        let denuncia = self
            .repo
            .criar(
                nova.id_usuario,
                &nova.titulo,
                &nova.descricao,
                nova.localizacao.as_deref(),
                nova.latitude,
                nova.longitude,
                foto_url.as_deref(),
            )
            .await?;

        tracing::info!(
            "📢 Nova denúncia #{} registrada pelo usuário {}",
            denuncia.id_denuncia,
            denuncia.id_usuario
        );
        Ok(denuncia)
    }

    pub async fn listar_do_usuario(
        &self,
        id_usuario: i64,
    ) -> Result<Vec<DenunciaComValidacoes>, AppError> {
        let denuncias = self.repo.listar_por_usuario(id_usuario).await?;
        self.com_validacoes(denuncias).await
    }

    pub async fn listar_pendentes_para(
        &self,
        id_usuario: i64,
    ) -> Result<Vec<DenunciaComValidacoes>, AppError> {
        let denuncias = self.repo.listar_pendentes_para(id_usuario).await?;
        self.com_validacoes(denuncias).await
    }

    pub async fn listar_todas(&self) -> Result<Vec<DenunciaComValidacoes>, AppError> {
        let denuncias = self.repo.listar_todas().await?;
        self.com_validacoes(denuncias).await
    }

    async fn com_validacoes(
        &self,
        denuncias: Vec<Denuncia>,
    ) -> Result<Vec<DenunciaComValidacoes>, AppError> {
        let ids: Vec<i64> = denuncias.iter().map(|d| d.id_denuncia).collect();
        let validacoes = if ids.is_empty() {
            Vec::new()
        } else {
            self.repo.listar_validacoes(&ids).await?
        };
        Ok(agrupar_validacoes(denuncias, validacoes))
    }

    // Registra um voto e, na mesma transação, promove a denúncia a
    // VALIDADA quando atinge o número de confirmações.
    pub async fn registrar_validacao(
        &self,
        payload: &CriarValidacaoPayload,
    ) -> Result<Validacao, AppError> {
        let mut tx = self.pool.begin().await?;

        // Trava a linha da denúncia: votos concorrentes na mesma
        // denúncia entram na fila e cada um conta os anteriores.
        let denuncia = self
            .repo
            .buscar_por_id_com_trava(&mut *tx, payload.id_denuncia)
            .await?
            .ok_or(AppError::DenunciaNaoEncontrada)?;

        if denuncia.id_usuario == payload.id_usuario {
            return Err(AppError::ValidacaoPropriaDenuncia);
        }
        if denuncia.status != StatusDenuncia::Pendente {
            return Err(AppError::DenunciaNaoPendente);
        }

        let validacao = self
            .repo
            .inserir_validacao(
                &mut *tx,
                payload.id_denuncia,
                payload.id_usuario,
                payload.tipo_validacao,
            )
            .await?;

        let confirmacoes = if payload.tipo_validacao == TipoValidacao::Confirmar {
            self.repo
                .contar_confirmacoes(&mut *tx, payload.id_denuncia)
                .await?
        } else {
            0
        };

        if promove_apos_voto(payload.tipo_validacao, confirmacoes) {
            self.repo
                .atualizar_status_exec(&mut *tx, payload.id_denuncia, StatusDenuncia::Validada)
                .await?;
            tracing::info!(
                "✅ Denúncia #{} validada pela comunidade ({} confirmações)",
                payload.id_denuncia,
                confirmacoes
            );
        }

        tx.commit().await?;
        Ok(validacao)
    }

    // Mudança de status feita pelo painel governamental.
    pub async fn atualizar_status(
        &self,
        id_denuncia: i64,
        novo_status: StatusDenuncia,
    ) -> Result<Denuncia, AppError> {
        let atual = self
            .repo
            .buscar_por_id(&self.pool, id_denuncia)
            .await?
            .ok_or(AppError::DenunciaNaoEncontrada)?;

        if !transicao_permitida(atual.status, novo_status) {
            return Err(AppError::TransicaoStatusInvalida {
                de: atual.status,
                para: novo_status,
            });
        }

        let denuncia = self.repo.atualizar_status(id_denuncia, novo_status).await?;
        tracing::info!(
            "📌 Denúncia #{} mudou de {:?} para {:?}",
            id_denuncia,
            atual.status,
            novo_status
        );
        Ok(denuncia)
    }
}

#[cfg(test)]
#[path = "denuncia_service_test.rs"]
mod denuncia_service_test;
