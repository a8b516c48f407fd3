use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

// ============================================================================
// Record
// ============================================================================

/// Contrato de fornecimento firmado com um fornecedor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrato {
    pub id: EntityId,
    pub numero: String,
    pub fornecedor_id: EntityId,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    /// Valor informado pelo backend; a tela de detalhe recalcula a partir dos itens
    #[serde(default)]
    pub valor_total: Option<f64>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl Contrato {
    /// Whether the contract covers the given day
    pub fn vigente_em(&self, dia: NaiveDate) -> bool {
        self.data_inicio <= dia && dia <= self.data_fim
    }
}

impl EntityRecord for Contrato {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ativo(&self) -> bool {
        self.ativo
    }

    fn label(&self) -> String {
        format!("Contrato {}", self.numero)
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "contratos"
    }

    fn element_name() -> &'static str {
        "Contrato"
    }

    fn list_name() -> &'static str {
        "Contratos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContratoDto {
    pub numero: String,
    pub fornecedor_id: EntityId,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub ativo: bool,
}

impl From<&Contrato> for ContratoDto {
    fn from(c: &Contrato) -> Self {
        Self {
            numero: c.numero.clone(),
            fornecedor_id: c.fornecedor_id,
            data_inicio: c.data_inicio,
            data_fim: c.data_fim,
            ativo: c.ativo,
        }
    }
}

/// The end date must not precede the start date
pub fn validate_periodo(inicio: NaiveDate, fim: NaiveDate) -> Result<(), String> {
    if fim < inicio {
        return Err("A data final deve ser igual ou posterior à data inicial".into());
    }
    Ok(())
}

// ============================================================================
// Sub-resource: line items
// ============================================================================

/// Produto contratado com quantidade e preço unitário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContratoProduto {
    pub id: EntityId,
    pub contrato_id: EntityId,
    pub produto_id: EntityId,
    #[serde(default)]
    pub quantidade: f64,
    #[serde(default)]
    pub preco_unitario: f64,
}

impl ContratoProduto {
    pub fn valor_total(&self) -> f64 {
        self.quantidade * self.preco_unitario
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContratoProdutoDto {
    pub produto_id: EntityId,
    pub quantidade: f64,
    pub preco_unitario: f64,
}

impl From<&ContratoProduto> for ContratoProdutoDto {
    fn from(p: &ContratoProduto) -> Self {
        Self {
            produto_id: p.produto_id,
            quantidade: p.quantidade,
            preco_unitario: p.preco_unitario,
        }
    }
}

/// Contract value summed over the loaded line items
pub fn valor_total_contrato(itens: &[ContratoProduto]) -> f64 {
    itens.iter().map(ContratoProduto::valor_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantidade: f64, preco_unitario: f64) -> ContratoProduto {
        ContratoProduto { id: 1, contrato_id: 1, produto_id: 1, quantidade, preco_unitario }
    }

    #[test]
    fn test_valor_total_contrato() {
        let itens = vec![item(10.0, 5.0), item(2.0, 100.0)];
        assert_eq!(valor_total_contrato(&itens), 250.0);
        assert_eq!(valor_total_contrato(&[]), 0.0);
    }

    #[test]
    fn test_validate_periodo() {
        let inicio = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let fim = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert!(validate_periodo(inicio, fim).is_ok());
        assert!(validate_periodo(inicio, inicio).is_ok());
        assert!(validate_periodo(fim, inicio).is_err());
    }

    #[test]
    fn test_dates_roundtrip_as_iso() {
        let json = r#"{"id":3,"numero":"12/2024","fornecedor_id":9,"data_inicio":"2024-02-01","data_fim":"2024-12-31"}"#;
        let c: Contrato = serde_json::from_str(json).unwrap();
        assert!(c.ativo);
        assert!(c.vigente_em(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        let dto = serde_json::to_value(ContratoDto::from(&c)).unwrap();
        assert_eq!(dto["data_fim"], "2024-12-31");
    }
}
