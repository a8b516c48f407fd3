//! Produtos (gêneros alimentícios)

pub mod ui;

use std::sync::Arc;

use contracts::domain::a005_produto::aggregate::{Produto, ProdutoDto};

use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{opt_to_string, string_to_opt, FieldKind, FormField, OptionsFn};
use crate::shared::list::resource::{CrudResource, ListResource};

pub const UNIDADES: [&str; 7] = ["kg", "g", "l", "ml", "un", "cx", "pct"];

pub fn unidade_options() -> OptionsFn {
    Arc::new(|| UNIDADES.iter().map(|u| (u.to_string(), u.to_string())).collect())
}

pub fn perecivel_options() -> OptionsFn {
    Arc::new(|| vec![("sim".into(), "Perecível".into()), ("nao".into(), "Não perecível".into())])
}

impl Listable for Produto {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            opt_to_string(&self.descricao),
            opt_to_string(&self.categoria),
        ]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "categoria" => FieldValue::opt_text(&self.categoria),
            "unidade" => FieldValue::opt_text(&self.unidade),
            "perecivel" => FieldValue::text(if self.perecivel { "sim" } else { "nao" }),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProdutoForm {
    pub nome: String,
    pub descricao: String,
    pub categoria: String,
    pub unidade: String,
    pub perecivel: bool,
    pub ativo: bool,
}

impl Default for ProdutoForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: String::new(),
            categoria: String::new(),
            unidade: String::new(),
            perecivel: false,
            ativo: true,
        }
    }
}

pub struct Produtos;

impl ListResource for Produtos {
    type Item = Produto;
}

impl CrudResource for Produtos {
    type Form = ProdutoForm;
    type Payload = ProdutoDto;

    fn form_from(p: &Produto) -> ProdutoForm {
        ProdutoForm {
            nome: p.nome.clone(),
            descricao: opt_to_string(&p.descricao),
            categoria: opt_to_string(&p.categoria),
            unidade: opt_to_string(&p.unidade),
            perecivel: p.perecivel,
            ativo: p.ativo,
        }
    }

    fn to_payload(f: &ProdutoForm) -> Result<ProdutoDto, String> {
        Ok(ProdutoDto {
            nome: f.nome.trim().to_string(),
            descricao: string_to_opt(&f.descricao),
            categoria: string_to_opt(&f.categoria),
            unidade: string_to_opt(&f.unidade),
            perecivel: f.perecivel,
            ativo: f.ativo,
        })
    }
}

pub fn fields() -> Vec<FormField<ProdutoForm>> {
    type Field = FormField<ProdutoForm>;
    vec![
        Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text("categoria", "Categoria", |f| f.categoria.clone(), |f, v| f.categoria = v),
        Field::text("unidade", "Unidade", |f| f.unidade.clone(), |f, v| f.unidade = v)
            .kind(FieldKind::Select(unidade_options()))
            .required(),
        Field::text("descricao", "Descrição", |f| f.descricao.clone(), |f, v| f.descricao = v)
            .kind(FieldKind::TextArea),
        Field::checkbox("perecivel", "Perecível", |f| f.perecivel, |f, v| f.perecivel = v),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::{matches, FilterState, StatusFilter};

    fn arroz() -> Produto {
        Produto {
            id: 1,
            nome: "Arroz".into(),
            descricao: None,
            categoria: Some("Cereais".into()),
            unidade: Some("kg".into()),
            perecivel: false,
            ativo: true,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        let p = arroz();
        assert_eq!(Produtos::to_payload(&Produtos::form_from(&p)), Ok(ProdutoDto::from(&p)));
    }

    #[test]
    fn test_status_excludes_active_record() {
        let mut state = FilterState::default();
        state.set_selected("categoria", "Cereais".into());
        state.search = "arr".into();
        assert!(matches(&arroz(), &state));
        state.status = StatusFilter::Inativos;
        assert!(!matches(&arroz(), &state));
    }

    #[test]
    fn test_perecivel_filter_key() {
        let mut state = FilterState::default();
        state.set_selected("perecivel", "sim".into());
        assert!(!matches(&arroz(), &state));
        state.set_selected("perecivel", "nao".into());
        assert!(matches(&arroz(), &state));
    }
}
