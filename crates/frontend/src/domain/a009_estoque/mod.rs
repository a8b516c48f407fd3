//! Posição do estoque central (somente leitura)

pub mod ui;

use std::sync::Arc;

use chrono::NaiveDate;
use contracts::domain::a009_estoque::aggregate::{EstoqueItem, SituacaoEstoque};

use crate::shared::config::config;
use crate::shared::date_utils::{to_input, today};
use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{opt_to_string, OptionsFn};
use crate::shared::list::lookup::NO_VALUE;
use crate::shared::list::resource::ListResource;

pub fn situacao_hoje(item: &EstoqueItem) -> SituacaoEstoque {
    item.situacao(today(), config().expiry_warning_days)
}

pub fn situacao_variant(situacao: SituacaoEstoque) -> &'static str {
    match situacao {
        SituacaoEstoque::Vencido => "error",
        SituacaoEstoque::Vencendo | SituacaoEstoque::Baixo => "warning",
        SituacaoEstoque::Normal => "success",
    }
}

pub fn situacao_options() -> OptionsFn {
    Arc::new(|| {
        SituacaoEstoque::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string()))
            .collect()
    })
}

/// "vence em 3 dias", "vencido há 2 dias"
pub fn prazo_label(dias: Option<i64>) -> String {
    match dias {
        None => NO_VALUE.to_string(),
        Some(0) => "vence hoje".to_string(),
        Some(1) => "vence amanhã".to_string(),
        Some(-1) => "vencido há 1 dia".to_string(),
        Some(d) if d < 0 => format!("vencido há {} dias", -d),
        Some(d) => format!("vence em {} dias", d),
    }
}

/// Number of positions in each situation, most severe first
pub fn contar_situacoes(
    items: &[EstoqueItem],
    hoje: NaiveDate,
    janela_alerta_dias: i64,
) -> Vec<(SituacaoEstoque, usize)> {
    SituacaoEstoque::ALL
        .iter()
        .map(|s| {
            let total = items
                .iter()
                .filter(|item| item.situacao(hoje, janela_alerta_dias) == *s)
                .count();
            (*s, total)
        })
        .collect()
}

impl Listable for EstoqueItem {
    fn search_fields(&self) -> Vec<String> {
        vec![opt_to_string(&self.produto_nome), opt_to_string(&self.lote)]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "produto_nome" => FieldValue::opt_text(&self.produto_nome),
            "lote" => FieldValue::opt_text(&self.lote),
            "unidade" => FieldValue::opt_text(&self.unidade),
            "quantidade" => FieldValue::Number(self.quantidade),
            "data_validade" => self
                .data_validade
                .map(|d| FieldValue::text(to_input(d)))
                .unwrap_or(FieldValue::Missing),
            "situacao" => FieldValue::text(situacao_hoje(self).key()),
            // Severity rank used as the default order
            "prioridade" => FieldValue::Number(situacao_hoje(self) as u8 as f64),
            _ => FieldValue::Missing,
        }
    }
}

pub struct Estoque;

impl ListResource for Estoque {
    type Item = EstoqueItem;

    fn default_sort() -> &'static str {
        "prioridade"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, quantidade: f64, minimo: Option<f64>, validade: Option<NaiveDate>) -> EstoqueItem {
        EstoqueItem {
            id,
            produto_id: id,
            produto_nome: Some(format!("Produto {}", id)),
            lote: None,
            quantidade,
            unidade: Some("kg".into()),
            estoque_minimo: minimo,
            data_validade: validade,
            ativo: true,
        }
    }

    #[test]
    fn test_prazo_label() {
        assert_eq!(prazo_label(None), "—");
        assert_eq!(prazo_label(Some(0)), "vence hoje");
        assert_eq!(prazo_label(Some(12)), "vence em 12 dias");
        assert_eq!(prazo_label(Some(-3)), "vencido há 3 dias");
    }

    #[test]
    fn test_contar_situacoes() {
        let hoje = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let items = vec![
            item(1, 5.0, None, NaiveDate::from_ymd_opt(2025, 3, 1)),
            item(2, 50.0, None, NaiveDate::from_ymd_opt(2025, 3, 20)),
            item(3, 50.0, None, NaiveDate::from_ymd_opt(2025, 3, 25)),
            item(4, 2.0, Some(10.0), None),
            item(5, 20.0, Some(10.0), None),
        ];
        assert_eq!(
            contar_situacoes(&items, hoje, 30),
            vec![
                (SituacaoEstoque::Vencido, 1),
                (SituacaoEstoque::Vencendo, 2),
                (SituacaoEstoque::Baixo, 1),
                (SituacaoEstoque::Normal, 1),
            ]
        );
    }

    #[test]
    fn test_severity_rank_follows_declaration_order() {
        let ranks: Vec<u8> = SituacaoEstoque::ALL.iter().map(|s| *s as u8).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert_eq!(situacao_variant(SituacaoEstoque::Vencido), "error");
    }
}
