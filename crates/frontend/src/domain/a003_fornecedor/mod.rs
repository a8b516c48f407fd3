//! Fornecedores

pub mod ui;

use std::sync::Arc;

use contracts::domain::a003_fornecedor::aggregate::{normalize_cnpj, Fornecedor, FornecedorDto};

use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{opt_to_string, string_to_opt, FieldKind, FormField, OptionsFn};
use crate::shared::list::resource::{CrudResource, ListResource};

pub const TIPOS: [(&str, &str); 3] = [
    ("empresa", "Empresa"),
    ("cooperativa", "Cooperativa"),
    ("agricultor_familiar", "Agricultor familiar"),
];

pub fn tipo_label(tipo: &Option<String>) -> String {
    match tipo.as_deref() {
        Some(key) => TIPOS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| key.to_string()),
        None => crate::shared::list::lookup::NO_VALUE.to_string(),
    }
}

pub fn tipo_options() -> OptionsFn {
    Arc::new(|| {
        TIPOS
            .iter()
            .map(|(k, label)| (k.to_string(), label.to_string()))
            .collect()
    })
}

impl Listable for Fornecedor {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            opt_to_string(&self.cnpj),
            opt_to_string(&self.email),
        ]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "cnpj" => FieldValue::opt_text(&self.cnpj),
            "tipo" => FieldValue::opt_text(&self.tipo),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FornecedorForm {
    pub nome: String,
    pub cnpj: String,
    pub email: String,
    pub telefone: String,
    pub tipo: String,
    pub ativo: bool,
}

impl Default for FornecedorForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            cnpj: String::new(),
            email: String::new(),
            telefone: String::new(),
            tipo: String::new(),
            ativo: true,
        }
    }
}

pub struct Fornecedores;

impl ListResource for Fornecedores {
    type Item = Fornecedor;
}

impl CrudResource for Fornecedores {
    type Form = FornecedorForm;
    type Payload = FornecedorDto;

    fn form_from(f: &Fornecedor) -> FornecedorForm {
        FornecedorForm {
            nome: f.nome.clone(),
            cnpj: opt_to_string(&f.cnpj),
            email: opt_to_string(&f.email),
            telefone: opt_to_string(&f.telefone),
            tipo: opt_to_string(&f.tipo),
            ativo: f.ativo,
        }
    }

    fn to_payload(f: &FornecedorForm) -> Result<FornecedorDto, String> {
        let cnpj = match string_to_opt(&f.cnpj) {
            Some(raw) => Some(normalize_cnpj(&raw)?),
            None => None,
        };
        Ok(FornecedorDto {
            nome: f.nome.trim().to_string(),
            cnpj,
            email: string_to_opt(&f.email),
            telefone: string_to_opt(&f.telefone),
            tipo: string_to_opt(&f.tipo),
            ativo: f.ativo,
        })
    }
}

pub fn fields() -> Vec<FormField<FornecedorForm>> {
    type Field = FormField<FornecedorForm>;
    vec![
        Field::text("nome", "Razão social / Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text("cnpj", "CNPJ", |f| f.cnpj.clone(), |f, v| f.cnpj = v),
        Field::text("tipo", "Tipo", |f| f.tipo.clone(), |f, v| f.tipo = v).kind(FieldKind::Select(tipo_options())),
        Field::text("email", "E-mail", |f| f.email.clone(), |f, v| f.email = v).kind(FieldKind::Email),
        Field::text("telefone", "Telefone", |f| f.telefone.clone(), |f, v| f.telefone = v),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::{apply_filters, FilterState};
    use crate::shared::list::pagination::Pagination;

    fn fornecedor(id: i64, nome: &str) -> Fornecedor {
        Fornecedor {
            id,
            nome: nome.into(),
            cnpj: Some("12345678000190".into()),
            email: None,
            telefone: Some("(11) 4000-1000".into()),
            tipo: Some("cooperativa".into()),
            ativo: true,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        let f = fornecedor(1, "Cooperativa Vale Verde");
        let form = Fornecedores::form_from(&f);
        assert_eq!(form.email, "");
        assert_eq!(Fornecedores::to_payload(&form), Ok(FornecedorDto::from(&f)));
    }

    #[test]
    fn test_cnpj_is_normalized_or_rejected() {
        let mut form = FornecedorForm {
            nome: "Hortifruti Ltda".into(),
            cnpj: "12.345.678/0001-90".into(),
            ..FornecedorForm::default()
        };
        assert_eq!(
            Fornecedores::to_payload(&form).map(|p| p.cnpj),
            Ok(Some("12345678000190".to_string()))
        );
        form.cnpj = "123".into();
        assert!(Fornecedores::to_payload(&form).is_err());
        form.cnpj = "  ".into();
        assert_eq!(Fornecedores::to_payload(&form).map(|p| p.cnpj), Ok(None));
    }

    #[test]
    fn test_search_ltda_first_page() {
        let fornecedores: Vec<Fornecedor> = (1..=25)
            .map(|i| {
                let nome = if i % 2 == 0 {
                    format!("Fornecedor {:02} LTDA", i)
                } else {
                    format!("Produtor {:02}", i)
                };
                fornecedor(i, &nome)
            })
            .collect();
        let state = FilterState { search: "ltda".into(), ..FilterState::default() };
        let filtered = apply_filters(&fornecedores, &state, "nome");
        assert_eq!(filtered.len(), 12);
        let page = Pagination::new(10);
        let first = page.slice(&filtered);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].nome, "Fornecedor 02 LTDA");
        assert_eq!(first[9].nome, "Fornecedor 20 LTDA");
    }

    #[test]
    fn test_tipo_label() {
        assert_eq!(tipo_label(&Some("agricultor_familiar".into())), "Agricultor familiar");
        assert_eq!(tipo_label(&Some("outro".into())), "outro");
        assert_eq!(tipo_label(&None), "—");
    }
}
