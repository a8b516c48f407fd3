use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

/// Rota de entrega que agrupa escolas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rota {
    pub id: EntityId,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl EntityRecord for Rota {
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
        "a008"
    }

    fn collection_name() -> &'static str {
        "rotas"
    }

    fn element_name() -> &'static str {
        "Rota"
    }

    fn list_name() -> &'static str {
        "Rotas"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RotaDto {
    pub nome: String,
    pub descricao: Option<String>,
    pub ativo: bool,
}

impl From<&Rota> for RotaDto {
    fn from(r: &Rota) -> Self {
        Self {
            nome: r.nome.clone(),
            descricao: r.descricao.clone(),
            ativo: r.ativo,
        }
    }
}
