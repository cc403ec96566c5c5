use super::*;

fn linha(mes: &str, denuncias: i64, resolvidas: i64) -> ContagemMensalRow {
    ContagemMensalRow {
        mes: Some(mes.to_owned()),
        denuncias: Some(denuncias),
        resolvidas: Some(resolvidas),
    }
}

#[test]
fn taxa_de_resolucao_sem_denuncias_e_zero() {
    assert_eq!(taxa_resolucao(0, 0), 0.0);
}

#[test]
fn taxa_de_resolucao_e_percentual() {
    assert!((taxa_resolucao(318, 253) - 79.559748).abs() < 1e-4);
    assert_eq!(taxa_resolucao(4, 1), 25.0);
}

#[test]
fn serie_mensal_completa_meses_sem_dados_com_zero() {
    let linhas = vec![linha("2026-06", 5, 2), linha("2026-08", 3, 0)];
    let serie = completar_serie_mensal(linhas, 2026, 8, 6);

    assert_eq!(serie.len(), 6);
    assert_eq!(serie[0].mes, "2026-03");
    assert_eq!(serie[5].mes, "2026-08");
    assert_eq!(serie[3], DenunciasPorMes { mes: "2026-06".into(), denuncias: 5, resolvidas: 2 });
    assert_eq!(serie[4], DenunciasPorMes { mes: "2026-07".into(), denuncias: 0, resolvidas: 0 });
    assert_eq!(serie[5].denuncias, 3);
}

#[test]
fn serie_mensal_atravessa_a_virada_do_ano() {
    let serie = completar_serie_mensal(Vec::new(), 2026, 2, 6);
    let rotulos: Vec<_> = serie.iter().map(|e| e.mes.as_str()).collect();
    assert_eq!(
        rotulos,
        vec!["2025-09", "2025-10", "2025-11", "2025-12", "2026-01", "2026-02"]
    );
}

#[test]
fn serie_mensal_ignora_linhas_sem_rotulo() {
    let linhas = vec![ContagemMensalRow { mes: None, denuncias: Some(9), resolvidas: None }];
    let serie = completar_serie_mensal(linhas, 2026, 8, 3);
    assert!(serie.iter().all(|e| e.denuncias == 0 && e.resolvidas == 0));
}
