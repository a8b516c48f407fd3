//! Escolas e suas modalidades atendidas

pub mod ui;

use std::sync::Arc;

use contracts::domain::a001_escola::aggregate::{
    Escola, EscolaDto, EscolaModalidade, EscolaModalidadeDto,
};

use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{
    id_to_string, opt_to_string, parse_id, parse_integer, parse_opt_id, string_to_opt, FieldKind,
    FormField, OptionsFn,
};
use crate::shared::list::lookup::NO_VALUE;
use crate::shared::list::resource::{CrudResource, ListResource};

pub const ADMINISTRACOES: [(&str, &str); 4] = [
    ("municipal", "Municipal"),
    ("estadual", "Estadual"),
    ("federal", "Federal"),
    ("filantropica", "Filantrópica"),
];

pub fn administracao_label(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(key) => ADMINISTRACOES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| key.to_string()),
        None => NO_VALUE.to_string(),
    }
}

pub fn administracao_options() -> OptionsFn {
    Arc::new(|| {
        ADMINISTRACOES
            .iter()
            .map(|(k, l)| (k.to_string(), l.to_string()))
            .collect()
    })
}

/// INEP school codes have 8 digits
pub fn validate_inep(codigo: &str) -> Result<(), String> {
    if codigo.len() == 8 && codigo.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("O código INEP deve conter 8 dígitos.".into())
    }
}

impl Listable for Escola {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            opt_to_string(&self.codigo_inep),
            opt_to_string(&self.municipio),
            opt_to_string(&self.endereco),
        ]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "nome" => FieldValue::text(&self.nome),
            "codigo_inep" => FieldValue::opt_text(&self.codigo_inep),
            "municipio" => FieldValue::opt_text(&self.municipio),
            "administracao" => FieldValue::opt_text(&self.administracao),
            "rota_id" => FieldValue::opt_id(self.rota_id),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EscolaForm {
    pub nome: String,
    pub codigo_inep: String,
    pub endereco: String,
    pub municipio: String,
    pub telefone: String,
    pub email: String,
    pub rota_id: String,
    pub administracao: String,
    pub ativo: bool,
}

impl Default for EscolaForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            codigo_inep: String::new(),
            endereco: String::new(),
            municipio: String::new(),
            telefone: String::new(),
            email: String::new(),
            rota_id: String::new(),
            administracao: String::new(),
            ativo: true,
        }
    }
}

pub struct Escolas;

impl ListResource for Escolas {
    type Item = Escola;
}

impl CrudResource for Escolas {
    type Form = EscolaForm;
    type Payload = EscolaDto;

    fn form_from(e: &Escola) -> EscolaForm {
        EscolaForm {
            nome: e.nome.clone(),
            codigo_inep: opt_to_string(&e.codigo_inep),
            endereco: opt_to_string(&e.endereco),
            municipio: opt_to_string(&e.municipio),
            telefone: opt_to_string(&e.telefone),
            email: opt_to_string(&e.email),
            rota_id: id_to_string(e.rota_id),
            administracao: opt_to_string(&e.administracao),
            ativo: e.ativo,
        }
    }

    fn to_payload(f: &EscolaForm) -> Result<EscolaDto, String> {
        let codigo_inep = string_to_opt(&f.codigo_inep);
        if let Some(codigo) = &codigo_inep {
            validate_inep(codigo)?;
        }
        Ok(EscolaDto {
            nome: f.nome.trim().to_string(),
            codigo_inep,
            endereco: string_to_opt(&f.endereco),
            municipio: string_to_opt(&f.municipio),
            telefone: string_to_opt(&f.telefone),
            email: string_to_opt(&f.email),
            rota_id: parse_opt_id(&f.rota_id, "Rota")?,
            administracao: string_to_opt(&f.administracao),
            ativo: f.ativo,
        })
    }
}

pub fn fields(rotas: OptionsFn) -> Vec<FormField<EscolaForm>> {
    type Field = FormField<EscolaForm>;
    vec![
        Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
        Field::text("codigo_inep", "Código INEP", |f| f.codigo_inep.clone(), |f, v| f.codigo_inep = v),
        Field::text("endereco", "Endereço", |f| f.endereco.clone(), |f, v| f.endereco = v),
        Field::text("municipio", "Município", |f| f.municipio.clone(), |f, v| f.municipio = v),
        Field::text("telefone", "Telefone", |f| f.telefone.clone(), |f, v| f.telefone = v),
        Field::text("email", "E-mail", |f| f.email.clone(), |f, v| f.email = v).kind(FieldKind::Email),
        Field::text("rota_id", "Rota", |f| f.rota_id.clone(), |f, v| f.rota_id = v)
            .kind(FieldKind::Select(rotas)),
        Field::text(
            "administracao",
            "Administração",
            |f| f.administracao.clone(),
            |f, v| f.administracao = v,
        )
        .kind(FieldKind::Select(administracao_options())),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

// ============================================================================
// Modalidades atendidas (sub-resource)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatriculaForm {
    pub modalidade_id: String,
    pub quantidade_alunos: String,
}

impl MatriculaForm {
    pub fn from_record(m: &EscolaModalidade) -> Self {
        Self {
            modalidade_id: m.modalidade_id.to_string(),
            quantidade_alunos: m.quantidade_alunos.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<EscolaModalidadeDto, String> {
        let quantidade_alunos = parse_integer(&self.quantidade_alunos, "Quantidade de alunos")?;
        if quantidade_alunos < 0 {
            return Err("A quantidade de alunos não pode ser negativa.".into());
        }
        Ok(EscolaModalidadeDto {
            modalidade_id: parse_id(&self.modalidade_id, "Modalidade")?,
            quantidade_alunos,
        })
    }
}

pub fn matricula_fields(modalidades: OptionsFn) -> Vec<FormField<MatriculaForm>> {
    type Field = FormField<MatriculaForm>;
    vec![
        Field::text("modalidade_id", "Modalidade", |f| f.modalidade_id.clone(), |f, v| f.modalidade_id = v)
            .kind(FieldKind::Select(modalidades))
            .required(),
        Field::text(
            "quantidade_alunos",
            "Quantidade de alunos",
            |f| f.quantidade_alunos.clone(),
            |f, v| f.quantidade_alunos = v,
        )
        .kind(FieldKind::Number)
        .required(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::form::validate_required;

    fn escola(codigo_inep: Option<&str>, rota_id: Option<i64>) -> Escola {
        Escola {
            id: 10,
            nome: "EMEF Monteiro Lobato".into(),
            codigo_inep: codigo_inep.map(String::from),
            endereco: Some("Rua das Flores, 100".into()),
            municipio: Some("Campinas".into()),
            telefone: None,
            email: Some("emef@exemplo.gov.br".into()),
            rota_id,
            administracao: Some("municipal".into()),
            ativo: true,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        for e in [escola(Some("35012345"), Some(3)), escola(None, None)] {
            let form = Escolas::form_from(&e);
            assert_eq!(Escolas::to_payload(&form), Ok(EscolaDto::from(&e)));
        }
    }

    #[test]
    fn test_prefill_coerces_none_to_empty() {
        let form = Escolas::form_from(&escola(None, None));
        assert_eq!(form.codigo_inep, "");
        assert_eq!(form.telefone, "");
        assert_eq!(form.rota_id, "");
    }

    #[test]
    fn test_inep_must_have_eight_digits() {
        let mut form = Escolas::form_from(&escola(None, None));
        form.codigo_inep = "1234".into();
        assert!(Escolas::to_payload(&form).is_err());
        form.codigo_inep = "3501234a".into();
        assert!(Escolas::to_payload(&form).is_err());
    }

    #[test]
    fn test_rota_field_filters_by_id() {
        use crate::shared::list::filter::{matches, FilterState};
        let mut state = FilterState::default();
        state.set_selected("rota_id", "3".into());
        assert!(matches(&escola(None, Some(3)), &state));
        assert!(!matches(&escola(None, Some(4)), &state));
        assert!(!matches(&escola(None, None), &state));
    }

    #[test]
    fn test_matricula_form() {
        let record = EscolaModalidade { id: 1, escola_id: 10, modalidade_id: 2, quantidade_alunos: 120 };
        let form = MatriculaForm::from_record(&record);
        assert_eq!(form.to_payload(), Ok(EscolaModalidadeDto::from(&record)));

        let empty = MatriculaForm::default();
        let fields = matricula_fields(Arc::new(Vec::<(String, String)>::new));
        assert_eq!(
            validate_required(&empty, &fields),
            Err("O campo \"Modalidade\" é obrigatório.".to_string())
        );
        let negative = MatriculaForm { modalidade_id: "2".into(), quantidade_alunos: "-3".into() };
        assert!(negative.to_payload().is_err());
    }
}
