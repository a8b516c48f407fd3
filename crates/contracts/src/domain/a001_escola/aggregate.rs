use serde::{Deserialize, Serialize};

use crate::domain::common::{default_ativo, EntityId, EntityRecord};

// ============================================================================
// Record
// ============================================================================

/// Escola atendida pelo programa de alimentação escolar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escola {
    pub id: EntityId,
    pub nome: String,
    #[serde(default)]
    pub codigo_inep: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rota_id: Option<EntityId>,
    /// "municipal", "estadual", "federal", ...
    #[serde(default)]
    pub administracao: Option<String>,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

impl EntityRecord for Escola {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "escolas"
    }

    fn element_name() -> &'static str {
        "Escola"
    }

    fn list_name() -> &'static str {
        "Escolas"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for creating/updating an escola
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EscolaDto {
    pub nome: String,
    pub codigo_inep: Option<String>,
    pub endereco: Option<String>,
    pub municipio: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub rota_id: Option<EntityId>,
    pub administracao: Option<String>,
    pub ativo: bool,
}

impl From<&Escola> for EscolaDto {
    fn from(e: &Escola) -> Self {
        Self {
            nome: e.nome.clone(),
            codigo_inep: e.codigo_inep.clone(),
            endereco: e.endereco.clone(),
            municipio: e.municipio.clone(),
            telefone: e.telefone.clone(),
            email: e.email.clone(),
            rota_id: e.rota_id,
            administracao: e.administracao.clone(),
            ativo: e.ativo,
        }
    }
}

// ============================================================================
// Sub-resource: enrollment per modality
// ============================================================================

/// Number of students of one escola enrolled in one modalidade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscolaModalidade {
    pub id: EntityId,
    pub escola_id: EntityId,
    pub modalidade_id: EntityId,
    #[serde(default)]
    pub quantidade_alunos: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EscolaModalidadeDto {
    pub modalidade_id: EntityId,
    pub quantidade_alunos: i64,
}

impl From<&EscolaModalidade> for EscolaModalidadeDto {
    fn from(m: &EscolaModalidade) -> Self {
        Self {
            modalidade_id: m.modalidade_id,
            quantidade_alunos: m.quantidade_alunos,
        }
    }
}

/// Total students of an escola, summed over the loaded enrollments
pub fn total_alunos(modalidades: &[EscolaModalidade]) -> i64 {
    modalidades.iter().map(|m| m.quantidade_alunos).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let escola: Escola = serde_json::from_str(r#"{"id": 7, "nome": "EMEF Centro"}"#).unwrap();
        assert_eq!(escola.id, 7);
        assert!(escola.ativo);
        assert_eq!(escola.rota_id, None);
        assert_eq!(escola.municipio, None);
    }

    #[test]
    fn test_total_alunos() {
        let items = vec![
            EscolaModalidade { id: 1, escola_id: 1, modalidade_id: 1, quantidade_alunos: 120 },
            EscolaModalidade { id: 2, escola_id: 1, modalidade_id: 2, quantidade_alunos: 35 },
        ];
        assert_eq!(total_alunos(&items), 155);
        assert_eq!(total_alunos(&[]), 0);
    }
}
