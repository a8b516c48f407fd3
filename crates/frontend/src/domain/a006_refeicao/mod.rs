//! Refeições servidas nas escolas

pub mod ui;

use std::sync::Arc;

use contracts::domain::a006_refeicao::aggregate::{Refeicao, RefeicaoDto};

use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{opt_to_string, string_to_opt, FieldKind, FormField, OptionsFn};
use crate::shared::list::lookup::NO_VALUE;
use crate::shared::list::resource::{CrudResource, ListResource};

pub const TIPOS: [(&str, &str); 4] = [
    ("desjejum", "Desjejum"),
    ("almoco", "Almoço"),
    ("lanche", "Lanche"),
    ("jantar", "Jantar"),
];

pub fn tipo_label(tipo: &Option<String>) -> String {
    match tipo.as_deref() {
        Some(key) => TIPOS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| key.to_string()),
        None => NO_VALUE.to_string(),
    }
}

pub fn tipo_options() -> OptionsFn {
    Arc::new(|| TIPOS.iter().map(|(k, l)| (k.to_string(), l.to_string())).collect())
}

impl Listable for Refeicao {
    fn search_fields(&self) -> Vec<String> {
        vec![self.nome.clone(), opt_to_string(&self.descricao)]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "tipo" => FieldValue::opt_text(&self.tipo),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefeicaoForm {
    pub nome: String,
    pub tipo: String,
    pub descricao: String,
    pub ativo: bool,
}

impl Default for RefeicaoForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            tipo: String::new(),
            descricao: String::new(),
            ativo: true,
        }
    }
}

pub struct Refeicoes;

impl ListResource for Refeicoes {
    type Item = Refeicao;
}

impl CrudResource for Refeicoes {
    type Form = RefeicaoForm;
    type Payload = RefeicaoDto;

    fn form_from(r: &Refeicao) -> RefeicaoForm {
        RefeicaoForm {
            nome: r.nome.clone(),
            tipo: opt_to_string(&r.tipo),
            descricao: opt_to_string(&r.descricao),
            ativo: r.ativo,
        }
    }

    fn to_payload(f: &RefeicaoForm) -> Result<RefeicaoDto, String> {
        Ok(RefeicaoDto {
            nome: f.nome.trim().to_string(),
            tipo: string_to_opt(&f.tipo),
            descricao: string_to_opt(&f.descricao),
            ativo: f.ativo,
        })
    }
}

pub fn fields() -> Vec<FormField<RefeicaoForm>> {
    type Field = FormField<RefeicaoForm>;
    vec![
        Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text("tipo", "Tipo", |f| f.tipo.clone(), |f, v| f.tipo = v).kind(FieldKind::Select(tipo_options())),
        Field::text("descricao", "Preparo / descrição", |f| f.descricao.clone(), |f, v| f.descricao = v)
            .kind(FieldKind::TextArea),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_round_trip() {
        let r = Refeicao {
            id: 9,
            nome: "Arroz com feijão".into(),
            tipo: Some("almoco".into()),
            descricao: None,
            ativo: true,
        };
        let form = Refeicoes::form_from(&r);
        assert_eq!(form.descricao, "");
        assert_eq!(Refeicoes::to_payload(&form), Ok(RefeicaoDto::from(&r)));
        assert_eq!(tipo_label(&r.tipo), "Almoço");
    }
}
