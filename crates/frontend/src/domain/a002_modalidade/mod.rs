//! Modalidades de ensino atendidas pela alimentação escolar

pub mod ui;

use contracts::domain::a002_modalidade::aggregate::{Modalidade, ModalidadeDto};

use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{
    decimal_to_string, opt_to_string, parse_decimal, string_to_opt, FieldKind, FormField,
};
use crate::shared::list::resource::{CrudResource, ListResource};

impl Listable for Modalidade {
    fn search_fields(&self) -> Vec<String> {
        vec![self.nome.clone(), opt_to_string(&self.codigo_financeiro)]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "codigo_financeiro" => FieldValue::opt_text(&self.codigo_financeiro),
            "valor_repasse" => FieldValue::Number(self.valor_repasse),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalidadeForm {
    pub nome: String,
    pub codigo_financeiro: String,
    pub valor_repasse: String,
    pub ativo: bool,
}

impl Default for ModalidadeForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            codigo_financeiro: String::new(),
            valor_repasse: String::new(),
            ativo: true,
        }
    }
}

pub struct Modalidades;

impl ListResource for Modalidades {
    type Item = Modalidade;
}

impl CrudResource for Modalidades {
    type Form = ModalidadeForm;
    type Payload = ModalidadeDto;

    fn form_from(m: &Modalidade) -> ModalidadeForm {
        ModalidadeForm {
            nome: m.nome.clone(),
            codigo_financeiro: opt_to_string(&m.codigo_financeiro),
            valor_repasse: decimal_to_string(m.valor_repasse),
            ativo: m.ativo,
        }
    }

    fn to_payload(f: &ModalidadeForm) -> Result<ModalidadeDto, String> {
        let valor_repasse = parse_decimal(&f.valor_repasse, "Valor de repasse")?;
        if valor_repasse < 0.0 {
            return Err("O valor de repasse não pode ser negativo.".into());
        }
        Ok(ModalidadeDto {
            nome: f.nome.trim().to_string(),
            codigo_financeiro: string_to_opt(&f.codigo_financeiro),
            valor_repasse,
            ativo: f.ativo,
        })
    }
}

pub fn fields() -> Vec<FormField<ModalidadeForm>> {
    type Field = FormField<ModalidadeForm>;
    vec![
        Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text(
            "codigo_financeiro",
            "Código financeiro",
            |f| f.codigo_financeiro.clone(),
            |f, v| f.codigo_financeiro = v,
        ),
        Field::text(
            "valor_repasse",
            "Valor de repasse (R$ por aluno/dia)",
            |f| f.valor_repasse.clone(),
            |f, v| f.valor_repasse = v,
        )
        .kind(FieldKind::Number),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modalidade(valor_repasse: f64) -> Modalidade {
        Modalidade {
            id: 2,
            nome: "Creche".into(),
            codigo_financeiro: Some("CRE".into()),
            valor_repasse,
            ativo: true,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        for valor in [1.07, 0.0, 2.0] {
            let m = modalidade(valor);
            assert_eq!(Modalidades::to_payload(&Modalidades::form_from(&m)), Ok(ModalidadeDto::from(&m)));
        }
    }

    #[test]
    fn test_repasse_accepts_comma_and_rejects_negative() {
        let mut form = ModalidadeForm {
            nome: "EJA".into(),
            valor_repasse: "0,53".into(),
            ..ModalidadeForm::default()
        };
        assert_eq!(Modalidades::to_payload(&form).map(|p| p.valor_repasse), Ok(0.53));
        form.valor_repasse = "-1".into();
        assert!(Modalidades::to_payload(&form).is_err());
        form.valor_repasse = "abc".into();
        assert!(Modalidades::to_payload(&form).is_err());
    }
}
