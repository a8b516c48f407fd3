use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

// ============================================================================
// Record
// ============================================================================

/// Posição de estoque central de um lote de produto (somente leitura)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstoqueItem {
    pub id: EntityId,
    pub produto_id: EntityId,
    #[serde(default)]
    pub produto_nome: Option<String>,
    #[serde(default)]
    pub lote: Option<String>,
    #[serde(default)]
    pub quantidade: f64,
    #[serde(default)]
    pub unidade: Option<String>,
    #[serde(default)]
    pub estoque_minimo: Option<f64>,
    #[serde(default)]
    pub data_validade: Option<NaiveDate>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

/// Alert situation of a stock position, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SituacaoEstoque {
    Vencido,
    Vencendo,
    Baixo,
    Normal,
}

impl SituacaoEstoque {
    pub const ALL: [SituacaoEstoque; 4] = [
        SituacaoEstoque::Vencido,
        SituacaoEstoque::Vencendo,
        SituacaoEstoque::Baixo,
        SituacaoEstoque::Normal,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SituacaoEstoque::Vencido => "vencido",
            SituacaoEstoque::Vencendo => "vencendo",
            SituacaoEstoque::Baixo => "baixo",
            SituacaoEstoque::Normal => "normal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SituacaoEstoque::Vencido => "Vencido",
            SituacaoEstoque::Vencendo => "Vencendo",
            SituacaoEstoque::Baixo => "Estoque baixo",
            SituacaoEstoque::Normal => "Normal",
        }
    }
}

impl EstoqueItem {
    /// Days from `hoje` until expiry; negative once expired
    pub fn dias_para_vencer(&self, hoje: NaiveDate) -> Option<i64> {
        self.data_validade.map(|v| (v - hoje).num_days())
    }

    pub fn situacao(&self, hoje: NaiveDate, janela_alerta_dias: i64) -> SituacaoEstoque {
        match self.dias_para_vencer(hoje) {
            Some(d) if d < 0 => return SituacaoEstoque::Vencido,
            Some(d) if d <= janela_alerta_dias => return SituacaoEstoque::Vencendo,
            _ => {}
        }
        match self.estoque_minimo {
            Some(min) if self.quantidade <= min => SituacaoEstoque::Baixo,
            _ => SituacaoEstoque::Normal,
        }
    }
}

impl EntityRecord for EstoqueItem {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ativo(&self) -> bool {
        self.ativo
    }

    fn label(&self) -> String {
        match (&self.produto_nome, &self.lote) {
            (Some(nome), Some(lote)) => format!("{} (lote {})", nome, lote),
            (Some(nome), None) => nome.clone(),
            _ => format!("Produto #{}", self.produto_id),
        }
    }

    fn entity_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "estoque"
    }

    fn element_name() -> &'static str {
        "Posição de estoque"
    }

    fn list_name() -> &'static str {
        "Estoque Central"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantidade: f64, minimo: Option<f64>, validade: Option<NaiveDate>) -> EstoqueItem {
        EstoqueItem {
            id: 1,
            produto_id: 10,
            produto_nome: Some("Feijão".into()),
            lote: None,
            quantidade,
            unidade: Some("kg".into()),
            estoque_minimo: minimo,
            data_validade: validade,
            ativo: true,
        }
    }

    #[test]
    fn test_situacao_priority() {
        let hoje = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let ontem = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let em_10_dias = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let em_90_dias = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();

        assert_eq!(item(5.0, Some(10.0), Some(ontem)).situacao(hoje, 30), SituacaoEstoque::Vencido);
        assert_eq!(item(50.0, None, Some(em_10_dias)).situacao(hoje, 30), SituacaoEstoque::Vencendo);
        assert_eq!(item(5.0, Some(10.0), Some(em_90_dias)).situacao(hoje, 30), SituacaoEstoque::Baixo);
        assert_eq!(item(50.0, Some(10.0), None).situacao(hoje, 30), SituacaoEstoque::Normal);
    }

    #[test]
    fn test_dias_para_vencer() {
        let hoje = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let v = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
        assert_eq!(item(1.0, None, Some(v)).dias_para_vencer(hoje), Some(3));
        assert_eq!(item(1.0, None, None).dias_para_vencer(hoje), None);
    }
}
