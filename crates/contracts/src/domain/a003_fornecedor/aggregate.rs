use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

/// Fornecedor de gêneros alimentícios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fornecedor {
    pub id: EntityId,
    pub nome: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    /// "empresa", "cooperativa", "agricultor_familiar"
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl EntityRecord for Fornecedor {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "fornecedores"
    }

    fn element_name() -> &'static str {
        "Fornecedor"
    }

    fn list_name() -> &'static str {
        "Fornecedores"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FornecedorDto {
    pub nome: String,
    pub cnpj: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub tipo: Option<String>,
    pub ativo: bool,
}

impl From<&Fornecedor> for FornecedorDto {
    fn from(f: &Fornecedor) -> Self {
        Self {
            nome: f.nome.clone(),
            cnpj: f.cnpj.clone(),
            email: f.email.clone(),
            telefone: f.telefone.clone(),
            tipo: f.tipo.clone(),
            ativo: f.ativo,
        }
    }
}

/// Strips everything but digits from a CNPJ and checks its length
pub fn normalize_cnpj(value: &str) -> Result<String, String> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 14 {
        return Err("CNPJ deve conter 14 dígitos".into());
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cnpj() {
        assert_eq!(normalize_cnpj("12.345.678/0001-90").unwrap(), "12345678000190");
        assert!(normalize_cnpj("123").is_err());
    }
}
