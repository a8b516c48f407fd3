use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

/// Refeição servida (preparação)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refeicao {
    pub id: EntityId,
    pub nome: String,
    /// "cafe_da_manha", "almoco", "lanche", "jantar"
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl EntityRecord for Refeicao {
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
        "a006"
    }

    fn collection_name() -> &'static str {
        "refeicoes"
    }

    fn element_name() -> &'static str {
        "Refeição"
    }

    fn list_name() -> &'static str {
        "Refeições"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RefeicaoDto {
    pub nome: String,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub ativo: bool,
}

impl From<&Refeicao> for RefeicaoDto {
    fn from(r: &Refeicao) -> Self {
        Self {
            nome: r.nome.clone(),
            tipo: r.tipo.clone(),
            descricao: r.descricao.clone(),
            ativo: r.ativo,
        }
    }
}
