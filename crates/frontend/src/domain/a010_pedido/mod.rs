//! Pedidos de compra (consulta e exclusão)

pub mod ui;

use std::collections::BTreeSet;
use std::sync::Arc;

use contracts::domain::a005_produto::aggregate::Produto;
use contracts::domain::a010_pedido::aggregate::{Pedido, PedidoItem};

use crate::shared::date_utils::to_input;
use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::OptionsFn;
use crate::shared::list::lookup::LookupTable;
use crate::shared::list::resource::ListResource;

pub const STATUS: [(&str, &str); 4] = [
    ("rascunho", "Rascunho"),
    ("enviado", "Enviado"),
    ("recebido", "Recebido"),
    ("cancelado", "Cancelado"),
];

pub fn status_label(status: &str) -> String {
    STATUS
        .iter()
        .find(|(k, _)| *k == status)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| status.to_string())
}

pub fn status_variant(status: &str) -> &'static str {
    match status {
        "enviado" => "primary",
        "recebido" => "success",
        "cancelado" => "error",
        _ => "neutral",
    }
}

pub fn status_options() -> OptionsFn {
    Arc::new(|| STATUS.iter().map(|(k, l)| (k.to_string(), l.to_string())).collect())
}

/// Product name carried by the item, else the catalogue label
pub fn produto_label(item: &PedidoItem, produtos: &LookupTable<Produto>) -> String {
    match item.produto_nome.as_deref().map(str::trim) {
        Some(nome) if !nome.is_empty() => nome.to_string(),
        _ => produtos.label_of(item.produto_id),
    }
}

impl Listable for Pedido {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.numero.clone()];
        fields.extend(self.itens.iter().filter_map(|i| i.produto_nome.clone()));
        fields
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "numero" => FieldValue::text(&self.numero),
            "data_pedido" => FieldValue::text(to_input(self.data_pedido)),
            "status" => FieldValue::text(&self.status),
            "valor_total" => FieldValue::Number(self.valor_total()),
            "itens" => FieldValue::Number(self.itens.len() as f64),
            _ => FieldValue::Missing,
        }
    }

    fn tags(&self, key: &str) -> Vec<String> {
        match key {
            "fornecedor_ids" => self
                .itens
                .iter()
                .map(|i| i.fornecedor_id)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(|id| id.to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}

pub struct Pedidos;

impl ListResource for Pedidos {
    type Item = Pedido;

    fn default_sort() -> &'static str {
        "numero"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::{apply_filters, FilterState};
    use chrono::NaiveDate;

    fn item(produto_id: i64, fornecedor_id: i64, nome: Option<&str>) -> PedidoItem {
        PedidoItem {
            produto_id,
            produto_nome: nome.map(String::from),
            fornecedor_id,
            quantidade: 1.0,
            preco_unitario: 10.0,
        }
    }

    fn pedido(id: i64, numero: &str, status: &str, itens: Vec<PedidoItem>) -> Pedido {
        Pedido {
            id,
            numero: numero.into(),
            data_pedido: NaiveDate::from_ymd_opt(2025, 1, id as u32).unwrap(),
            status: status.into(),
            itens,
            ativo: true,
        }
    }

    #[test]
    fn test_fornecedor_tags_are_distinct() {
        let p = pedido(1, "001/2025", "enviado", vec![item(1, 7, None), item(2, 3, None), item(3, 7, None)]);
        assert_eq!(p.tags("fornecedor_ids"), vec!["3".to_string(), "7".to_string()]);
        assert!(p.tags("outro").is_empty());
    }

    #[test]
    fn test_status_and_supplier_filters_compose() {
        let items = vec![
            pedido(1, "001/2025", "enviado", vec![item(1, 7, None)]),
            pedido(2, "002/2025", "recebido", vec![item(1, 7, None)]),
            pedido(3, "003/2025", "enviado", vec![item(1, 3, None)]),
        ];
        let mut state = FilterState::default();
        state.set_selected("status", "enviado".into());
        state.toggle_multi("fornecedor_ids", "7");
        let numeros: Vec<String> = apply_filters(&items, &state, Pedidos::default_sort())
            .into_iter()
            .map(|p| p.numero)
            .collect();
        assert_eq!(numeros, vec!["001/2025"]);
    }

    #[test]
    fn test_search_matches_item_names() {
        let p = pedido(1, "001/2025", "enviado", vec![item(1, 7, Some("Feijão carioca"))]);
        let mut state = FilterState::default();
        state.search = "feijão".into();
        assert_eq!(apply_filters(&[p], &state, "numero").len(), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(status_label("recebido"), "Recebido");
        assert_eq!(status_label("desconhecido"), "desconhecido");
        let produtos = LookupTable::<Produto>::default();
        assert_eq!(produto_label(&item(5, 1, Some("Arroz")), &produtos), "Arroz");
        assert_eq!(produto_label(&item(5, 1, None), &produtos), "#5 (não encontrado)");
    }
}
