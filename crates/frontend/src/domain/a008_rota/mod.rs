//! Rotas de entrega

pub mod ui;

use contracts::domain::a008_rota::aggregate::{Rota, RotaDto};

use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{opt_to_string, string_to_opt, FieldKind, FormField};
use crate::shared::list::resource::{CrudResource, ListResource};

impl Listable for Rota {
    fn search_fields(&self) -> Vec<String> {
        vec![self.nome.clone(), opt_to_string(&self.descricao)]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "descricao" => FieldValue::opt_text(&self.descricao),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotaForm {
    pub nome: String,
    pub descricao: String,
    pub ativo: bool,
}

impl Default for RotaForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            descricao: String::new(),
            ativo: true,
        }
    }
}

pub struct Rotas;

impl ListResource for Rotas {
    type Item = Rota;
}

impl CrudResource for Rotas {
    type Form = RotaForm;
    type Payload = RotaDto;

    fn form_from(r: &Rota) -> RotaForm {
        RotaForm {
            nome: r.nome.clone(),
            descricao: opt_to_string(&r.descricao),
            ativo: r.ativo,
        }
    }

    fn to_payload(f: &RotaForm) -> Result<RotaDto, String> {
        Ok(RotaDto {
            nome: f.nome.trim().to_string(),
            descricao: string_to_opt(&f.descricao),
            ativo: f.ativo,
        })
    }
}

pub fn fields() -> Vec<FormField<RotaForm>> {
    type Field = FormField<RotaForm>;
    vec![
        Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text("descricao", "Descrição", |f| f.descricao.clone(), |f, v| f.descricao = v)
            .kind(FieldKind::TextArea),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::form::validate_required;

    fn rota(descricao: Option<&str>) -> Rota {
        Rota {
            id: 4,
            nome: "Rota Norte".into(),
            descricao: descricao.map(String::from),
            ativo: false,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        for r in [rota(Some("Zona rural")), rota(None)] {
            assert_eq!(Rotas::to_payload(&Rotas::form_from(&r)), Ok(RotaDto::from(&r)));
        }
    }

    #[test]
    fn test_new_form_requires_nome() {
        let form = RotaForm::default();
        assert!(form.ativo);
        assert_eq!(
            validate_required(&form, &fields()),
            Err("O campo \"Nome\" é obrigatório.".to_string())
        );
    }
}
