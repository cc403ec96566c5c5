// src/services/relatorio_service.rs

use chrono::Utc;
use genpdf::{elements, style, Element};
use image::Luma;
use qrcode::QrCode;

use crate::{
    common::error::AppError, models::dashboard::DashboardGovernamental,
    services::dashboard_service::DashboardService,
};

#[derive(Clone)]
pub struct RelatorioService {
    dashboard: DashboardService,
    url_publica: Option<String>,
}

impl RelatorioService {
    pub fn new(dashboard: DashboardService, url_publica: Option<String>) -> Self {
        Self { dashboard, url_publica }
    }

    // O infográfico do painel governamental, gerado em memória.
    pub async fn gerar_infografico(&self) -> Result<Vec<u8>, AppError> {
        let dados = self.dashboard.montar().await?;
        self.montar_documento(&dados)
    }

    fn montar_documento(&self, dados: &DashboardGovernamental) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| anyhow::anyhow!("Fonte não encontrada na pasta ./fonts"))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title("Rec'Map - Infográfico de Denúncias");
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new("REC'MAP")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(
            elements::Paragraph::new("Infográfico de denúncias e pontos de coleta")
                .styled(style::Style::new().with_font_size(12)),
        );
        doc.push(elements::Paragraph::new(format!(
            "Gerado em: {}",
            Utc::now().format("%d/%m/%Y")
        )));
        doc.push(elements::Break::new(1.5));

        // --- CARDS ---
        doc.push(
            elements::Paragraph::new("VISÃO GERAL")
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        doc.push(elements::Paragraph::new(format!(
            "Total de denúncias: {}",
            dados.total_denuncias
        )));
        doc.push(elements::Paragraph::new(format!(
            "Denúncias resolvidas: {} ({:.1}% de resolução)",
            dados.denuncias_resolvidas, dados.taxa_resolucao
        )));
        doc.push(elements::Paragraph::new(format!(
            "Usuários ativos: {}",
            dados.usuarios_ativos
        )));
        doc.push(elements::Paragraph::new(format!(
            "Pontos de coleta: {}",
            dados.pontos_de_coleta
        )));
        doc.push(elements::Break::new(2));

        let style_bold = style::Style::new().bold();

        // --- DISTRIBUIÇÃO POR STATUS ---
        doc.push(
            elements::Paragraph::new("DENÚNCIAS POR STATUS")
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        let mut tabela_status = elements::TableLayout::new(vec![3, 1]);
        tabela_status.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));
        tabela_status
            .row()
            .element(elements::Paragraph::new("Status").styled(style_bold))
            .element(elements::Paragraph::new("Total").styled(style_bold))
            .push()
            .expect("Table error");
        for entrada in &dados.denuncias_por_status {
            tabela_status
                .row()
                .element(elements::Paragraph::new(format!("{:?}", entrada.status)))
                .element(elements::Paragraph::new(entrada.total.to_string()))
                .push()
                .expect("Table row error");
        }
        doc.push(tabela_status);
        doc.push(elements::Break::new(2));

        // --- SÉRIE MENSAL ---
        doc.push(
            elements::Paragraph::new("DENÚNCIAS POR MÊS")
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        let mut tabela_meses = elements::TableLayout::new(vec![2, 1, 1]);
        tabela_meses.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));
        tabela_meses
            .row()
            .element(elements::Paragraph::new("Mês").styled(style_bold))
            .element(elements::Paragraph::new("Denúncias").styled(style_bold))
            .element(elements::Paragraph::new("Resolvidas").styled(style_bold))
            .push()
            .expect("Table error");
        for entrada in &dados.denuncias_por_mes {
            tabela_meses
                .row()
                .element(elements::Paragraph::new(entrada.mes.clone()))
                .element(elements::Paragraph::new(entrada.denuncias.to_string()))
                .element(elements::Paragraph::new(entrada.resolvidas.to_string()))
                .push()
                .expect("Table row error");
        }
        doc.push(tabela_meses);

        // --- QR CODE PARA O MAPA PÚBLICO ---
        if let Some(url) = &self.url_publica {
            doc.push(elements::Break::new(2));
            doc.push(
                elements::Paragraph::new("ACOMPANHE NO MAPA")
                    .styled(style::Style::new().bold().with_font_size(12)),
            );
            doc.push(elements::Paragraph::new(url.clone()));
            doc.push(elements::Break::new(1));

            let code = QrCode::new(url.as_bytes())
                .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

            let image_buffer = code.render::<Luma<u8>>().build();
            let dynamic_image = image::DynamicImage::ImageLuma8(image_buffer);

            let pdf_image = genpdf::elements::Image::from_dynamic_image(dynamic_image)
                .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?
                .with_scale(genpdf::Scale::new(0.5, 0.5));

            doc.push(pdf_image);
        }

        // Renderiza para buffer (memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }
}
