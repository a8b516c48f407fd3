use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

/// Modalidade de ensino (creche, pré-escola, fundamental, EJA...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modalidade {
    pub id: EntityId,
    pub nome: String,
    #[serde(default)]
    pub codigo_financeiro: Option<String>,
    /// Valor de repasse per capita por dia letivo
    #[serde(default)]
    pub valor_repasse: f64,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl EntityRecord for Modalidade {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ativo(&self) -> bool {
        self.ativo
    }

    fn label(&self) -> String {
        self.nome.clone()
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "modalidades"
    }

    fn element_name() -> &'static str {
        "Modalidade"
    }

    fn list_name() -> &'static str {
        "Modalidades"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModalidadeDto {
    pub nome: String,
    pub codigo_financeiro: Option<String>,
    pub valor_repasse: f64,
    pub ativo: bool,
}

impl From<&Modalidade> for ModalidadeDto {
    fn from(m: &Modalidade) -> Self {
        Self {
            nome: m.nome.clone(),
            codigo_financeiro: m.codigo_financeiro.clone(),
            valor_repasse: m.valor_repasse,
            ativo: m.ativo,
        }
    }
}
