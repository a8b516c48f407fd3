//! Cardápios mensais por modalidade

pub mod ui;

use std::sync::Arc;

use contracts::domain::a007_cardapio::aggregate::{Cardapio, CardapioDto};

use crate::shared::date_utils::MESES;
use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{
    join_keys, opt_to_string, parse_id_list, parse_integer, string_to_opt, FieldKind, FormField,
    OptionsFn,
};
use crate::shared::list::resource::{CrudResource, ListResource};

pub fn mes_options() -> OptionsFn {
    Arc::new(|| {
        MESES
            .iter()
            .enumerate()
            .map(|(i, nome)| ((i + 1).to_string(), nome.to_string()))
            .collect()
    })
}

impl Listable for Cardapio {
    fn search_fields(&self) -> Vec<String> {
        vec![self.nome.clone(), opt_to_string(&self.observacao)]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "ano" => FieldValue::Number(self.ano as f64),
            "mes" => FieldValue::Number(self.mes as f64),
            "competencia" => FieldValue::Number((self.ano as f64) * 100.0 + self.mes as f64),
            _ => FieldValue::Missing,
        }
    }

    fn tags(&self, key: &str) -> Vec<String> {
        match key {
            "modalidade_ids" => self.modalidade_ids.iter().map(|id| id.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardapioForm {
    pub nome: String,
    pub mes: String,
    pub ano: String,
    pub modalidade_ids: String,
    pub observacao: String,
    pub ativo: bool,
}

impl Default for CardapioForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            mes: String::new(),
            ano: String::new(),
            modalidade_ids: String::new(),
            observacao: String::new(),
            ativo: true,
        }
    }
}

pub struct Cardapios;

impl ListResource for Cardapios {
    type Item = Cardapio;
}

impl CrudResource for Cardapios {
    type Form = CardapioForm;
    type Payload = CardapioDto;

    fn form_from(c: &Cardapio) -> CardapioForm {
        CardapioForm {
            nome: c.nome.clone(),
            mes: c.mes.to_string(),
            ano: c.ano.to_string(),
            modalidade_ids: join_keys(&c.modalidade_ids),
            observacao: opt_to_string(&c.observacao),
            ativo: c.ativo,
        }
    }

    fn to_payload(f: &CardapioForm) -> Result<CardapioDto, String> {
        let mes = parse_integer(&f.mes, "Mês")?;
        if !(1..=12).contains(&mes) {
            return Err("Selecione o mês de competência.".into());
        }
        let ano = parse_integer(&f.ano, "Ano")?;
        if !(2000..=2100).contains(&ano) {
            return Err("Informe um ano de competência válido.".into());
        }
        Ok(CardapioDto {
            nome: f.nome.trim().to_string(),
            mes: mes as u32,
            ano: ano as i32,
            modalidade_ids: parse_id_list(&f.modalidade_ids, "Modalidades")?,
            observacao: string_to_opt(&f.observacao),
            ativo: f.ativo,
        })
    }
}

pub fn fields(modalidades: OptionsFn) -> Vec<FormField<CardapioForm>> {
    type Field = FormField<CardapioForm>;
    vec![
        Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text("mes", "Mês", |f| f.mes.clone(), |f, v| f.mes = v)
            .kind(FieldKind::Select(mes_options()))
            .required(),
        Field::text("ano", "Ano", |f| f.ano.clone(), |f, v| f.ano = v)
            .kind(FieldKind::Number)
            .required(),
        Field::text(
            "modalidade_ids",
            "Modalidades",
            |f| f.modalidade_ids.clone(),
            |f, v| f.modalidade_ids = v,
        )
        .kind(FieldKind::MultiSelect(modalidades))
        .required(),
        Field::text("observacao", "Observação", |f| f.observacao.clone(), |f, v| f.observacao = v)
            .kind(FieldKind::TextArea),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::filter::{apply_filters, FilterState};

    fn cardapio(id: i64, mes: u32, ano: i32, modalidade_ids: Vec<i64>) -> Cardapio {
        Cardapio {
            id,
            nome: format!("Cardápio {}", id),
            mes,
            ano,
            modalidade_ids,
            observacao: None,
            ativo: true,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        let c = cardapio(1, 3, 2025, vec![2, 5]);
        let form = Cardapios::form_from(&c);
        assert_eq!(form.modalidade_ids, "2,5");
        assert_eq!(Cardapios::to_payload(&form), Ok(CardapioDto::from(&c)));
    }

    #[test]
    fn test_competencia_checks() {
        let mut form = Cardapios::form_from(&cardapio(1, 3, 2025, vec![2]));
        form.mes = "13".into();
        assert!(Cardapios::to_payload(&form).is_err());
        form.mes = "12".into();
        form.ano = "25".into();
        assert!(Cardapios::to_payload(&form).is_err());
    }

    #[test]
    fn test_modalidade_multi_select() {
        let items = vec![
            cardapio(1, 2, 2025, vec![1]),
            cardapio(2, 3, 2025, vec![2, 3]),
            cardapio(3, 1, 2025, vec![]),
        ];
        let mut state = FilterState::default();
        state.toggle_multi("modalidade_ids", "3");
        let ids: Vec<i64> = apply_filters(&items, &state, "nome").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2]);

        state.toggle_multi("modalidade_ids", "1");
        state.sort_by = Some("competencia".into());
        let ids: Vec<i64> = apply_filters(&items, &state, "nome").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
