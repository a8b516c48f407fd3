use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

// ============================================================================
// Record
// ============================================================================

/// Pedido de compra com itens de um ou mais fornecedores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: EntityId,
    pub numero: String,
    pub data_pedido: NaiveDate,
    /// "rascunho", "enviado", "recebido", "cancelado"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub itens: Vec<PedidoItem>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoItem {
    pub produto_id: EntityId,
    #[serde(default)]
    pub produto_nome: Option<String>,
    pub fornecedor_id: EntityId,
    #[serde(default)]
    pub quantidade: f64,
    #[serde(default)]
    pub preco_unitario: f64,
}

impl PedidoItem {
    pub fn valor_total(&self) -> f64 {
        self.quantidade * self.preco_unitario
    }
}

/// Subtotal of one supplier inside an order
#[derive(Debug, Clone, PartialEq)]
pub struct TotalFornecedor {
    pub fornecedor_id: EntityId,
    pub itens: usize,
    pub valor_total: f64,
}

impl Pedido {
    pub fn valor_total(&self) -> f64 {
        self.itens.iter().map(PedidoItem::valor_total).sum()
    }

    /// Items grouped by supplier, ordered by supplier id
    pub fn totais_por_fornecedor(&self) -> Vec<TotalFornecedor> {
        let mut grupos: BTreeMap<EntityId, TotalFornecedor> = BTreeMap::new();
        for item in &self.itens {
            let entry = grupos.entry(item.fornecedor_id).or_insert(TotalFornecedor {
                fornecedor_id: item.fornecedor_id,
                itens: 0,
                valor_total: 0.0,
            });
            entry.itens += 1;
            entry.valor_total += item.valor_total();
        }
        grupos.into_values().collect()
    }
}

impl EntityRecord for Pedido {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ativo(&self) -> bool {
        self.ativo
    }

    fn label(&self) -> String {
        format!("Pedido {}", self.numero)
    }

    fn entity_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "pedidos"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos de compra"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(fornecedor_id: EntityId, quantidade: f64, preco_unitario: f64) -> PedidoItem {
        PedidoItem { produto_id: 1, produto_nome: None, fornecedor_id, quantidade, preco_unitario }
    }

    #[test]
    fn test_totais_por_fornecedor() {
        let pedido = Pedido {
            id: 1,
            numero: "001/2025".into(),
            data_pedido: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            status: "enviado".into(),
            itens: vec![item(7, 2.0, 10.0), item(3, 1.0, 4.5), item(7, 1.0, 5.0)],
            ativo: true,
        };

        assert_eq!(pedido.valor_total(), 29.5);
        let grupos = pedido.totais_por_fornecedor();
        assert_eq!(grupos.len(), 2);
        assert_eq!(grupos[0], TotalFornecedor { fornecedor_id: 3, itens: 1, valor_total: 4.5 });
        assert_eq!(grupos[1], TotalFornecedor { fornecedor_id: 7, itens: 2, valor_total: 25.0 });
    }
}
