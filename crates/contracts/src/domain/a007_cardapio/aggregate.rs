use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

/// Cardápio mensal aplicado a uma ou mais modalidades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cardapio {
    pub id: EntityId,
    pub nome: String,
    pub mes: u32,
    pub ano: i32,
    #[serde(default)]
    pub modalidade_ids: Vec<EntityId>,
    #[serde(default)]
    pub observacao: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl Cardapio {
    /// "03/2025"
    pub fn competencia(&self) -> String {
        format!("{:02}/{}", self.mes, self.ano)
    }
}

impl EntityRecord for Cardapio {
    fn id(&self) -> EntityId {
        self.id
    }

    fn ativo(&self) -> bool {
        self.ativo
    }

    fn label(&self) -> String {
        format!("{} ({})", self.nome, self.competencia())
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "cardapios"
    }

    fn element_name() -> &'static str {
        "Cardápio"
    }

    fn list_name() -> &'static str {
        "Cardápios"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CardapioDto {
    pub nome: String,
    pub mes: u32,
    pub ano: i32,
    pub modalidade_ids: Vec<EntityId>,
    pub observacao: Option<String>,
    pub ativo: bool,
}

impl From<&Cardapio> for CardapioDto {
    fn from(c: &Cardapio) -> Self {
        Self {
            nome: c.nome.clone(),
            mes: c.mes,
            ano: c.ano,
            modalidade_ids: c.modalidade_ids.clone(),
            observacao: c.observacao.clone(),
            ativo: c.ativo,
        }
    }
}
