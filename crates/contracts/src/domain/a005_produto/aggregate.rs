use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

/// Gênero alimentício
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: EntityId,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    /// "kg", "un", "l", "pct"
    #[serde(default)]
    pub unidade: Option<String>,
    #[serde(default)]
    pub perecivel: bool,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl EntityRecord for Produto {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "produtos"
    }

    fn element_name() -> &'static str {
        "Produto"
    }

    fn list_name() -> &'static str {
        "Produtos"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProdutoDto {
    pub nome: String,
    pub descricao: Option<String>,
    pub categoria: Option<String>,
    pub unidade: Option<String>,
    pub perecivel: bool,
    pub ativo: bool,
}

impl From<&Produto> for ProdutoDto {
    fn from(p: &Produto) -> Self {
        Self {
            nome: p.nome.clone(),
            descricao: p.descricao.clone(),
            categoria: p.categoria.clone(),
            unidade: p.unidade.clone(),
            perecivel: p.perecivel,
            ativo: p.ativo,
        }
    }
}
