//! Contratos de fornecimento e seus itens

pub mod ui;

use std::sync::Arc;

use chrono::NaiveDate;
use contracts::domain::a004_contrato::aggregate::{
    validate_periodo, Contrato, ContratoDto, ContratoProduto, ContratoProdutoDto,
};

use crate::shared::date_utils::{to_input, today};
use crate::shared::list::filter::{FieldValue, Listable};
use crate::shared::list::form::{
    decimal_to_string, parse_date, parse_decimal, parse_id, validate_required, FieldKind, FormField,
    OptionsFn,
};
use crate::shared::list::resource::{CrudResource, ListResource};

pub const VIGENCIAS: [(&str, &str); 3] = [
    ("futuro", "A iniciar"),
    ("vigente", "Vigente"),
    ("encerrado", "Encerrado"),
];

/// Key of the period situation on `hoje`
pub fn vigencia(c: &Contrato, hoje: NaiveDate) -> &'static str {
    if hoje < c.data_inicio {
        "futuro"
    } else if c.vigente_em(hoje) {
        "vigente"
    } else {
        "encerrado"
    }
}

pub fn vigencia_label(key: &str) -> &'static str {
    VIGENCIAS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

pub fn vigencia_options() -> OptionsFn {
    Arc::new(|| {
        VIGENCIAS
            .iter()
            .map(|(k, l)| (k.to_string(), l.to_string()))
            .collect()
    })
}

impl Listable for Contrato {
    fn search_fields(&self) -> Vec<String> {
        vec![self.numero.clone()]
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "numero" => FieldValue::text(&self.numero),
            "fornecedor_id" => FieldValue::Number(self.fornecedor_id as f64),
            // ISO dates sort chronologically as text
            "data_inicio" => FieldValue::text(to_input(self.data_inicio)),
            "data_fim" => FieldValue::text(to_input(self.data_fim)),
            "valor_total" => self
                .valor_total
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Missing),
            "vigencia" => FieldValue::text(vigencia(self, today())),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContratoForm {
    pub numero: String,
    pub fornecedor_id: String,
    pub data_inicio: String,
    pub data_fim: String,
    pub ativo: bool,
}

impl Default for ContratoForm {
    fn default() -> Self {
        Self {
            numero: String::new(),
            fornecedor_id: String::new(),
            data_inicio: String::new(),
            data_fim: String::new(),
            ativo: true,
        }
    }
}

pub struct Contratos;

impl ListResource for Contratos {
    type Item = Contrato;

    fn default_sort() -> &'static str {
        "numero"
    }
}

impl CrudResource for Contratos {
    type Form = ContratoForm;
    type Payload = ContratoDto;

    fn form_from(c: &Contrato) -> ContratoForm {
        ContratoForm {
            numero: c.numero.clone(),
            fornecedor_id: c.fornecedor_id.to_string(),
            data_inicio: to_input(c.data_inicio),
            data_fim: to_input(c.data_fim),
            ativo: c.ativo,
        }
    }

    fn to_payload(f: &ContratoForm) -> Result<ContratoDto, String> {
        let data_inicio = parse_date(&f.data_inicio, "Data de início")?;
        let data_fim = parse_date(&f.data_fim, "Data de término")?;
        validate_periodo(data_inicio, data_fim)?;
        Ok(ContratoDto {
            numero: f.numero.trim().to_string(),
            fornecedor_id: parse_id(&f.fornecedor_id, "Fornecedor")?,
            data_inicio,
            data_fim,
            ativo: f.ativo,
        })
    }
}

pub fn fields(fornecedores: OptionsFn) -> Vec<FormField<ContratoForm>> {
    type Field = FormField<ContratoForm>;
    vec![
        Field::text("numero", "Número", |f| f.numero.clone(), |f, v| f.numero = v).required(),
        Field::text("fornecedor_id", "Fornecedor", |f| f.fornecedor_id.clone(), |f, v| f.fornecedor_id = v)
            .kind(FieldKind::Select(fornecedores))
            .required(),
        Field::text("data_inicio", "Data de início", |f| f.data_inicio.clone(), |f, v| f.data_inicio = v)
            .kind(FieldKind::Date)
            .required(),
        Field::text("data_fim", "Data de término", |f| f.data_fim.clone(), |f, v| f.data_fim = v)
            .kind(FieldKind::Date)
            .required(),
        Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
    ]
}

/// Required fields first, then the date and supplier checks of the payload
pub fn check_contrato(form: &ContratoForm, fields: &[FormField<ContratoForm>]) -> Result<ContratoDto, String> {
    validate_required(form, fields)?;
    Contratos::to_payload(form)
}

// ============================================================================
// Itens do contrato (sub-resource)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub produto_id: String,
    pub quantidade: String,
    pub preco_unitario: String,
}

impl ItemForm {
    pub fn from_record(item: &ContratoProduto) -> Self {
        Self {
            produto_id: item.produto_id.to_string(),
            quantidade: decimal_to_string(item.quantidade),
            preco_unitario: decimal_to_string(item.preco_unitario),
        }
    }

    pub fn to_payload(&self) -> Result<ContratoProdutoDto, String> {
        let quantidade = parse_decimal(&self.quantidade, "Quantidade")?;
        if quantidade <= 0.0 {
            return Err("A quantidade deve ser maior que zero.".into());
        }
        let preco_unitario = parse_decimal(&self.preco_unitario, "Preço unitário")?;
        if preco_unitario < 0.0 {
            return Err("O preço unitário não pode ser negativo.".into());
        }
        Ok(ContratoProdutoDto {
            produto_id: parse_id(&self.produto_id, "Produto")?,
            quantidade,
            preco_unitario,
        })
    }
}

pub fn item_fields(produtos: OptionsFn) -> Vec<FormField<ItemForm>> {
    type Field = FormField<ItemForm>;
    vec![
        Field::text("produto_id", "Produto", |f| f.produto_id.clone(), |f, v| f.produto_id = v)
            .kind(FieldKind::Select(produtos))
            .required(),
        Field::text("quantidade", "Quantidade", |f| f.quantidade.clone(), |f, v| f.quantidade = v)
            .kind(FieldKind::Number)
            .required(),
        Field::text(
            "preco_unitario",
            "Preço unitário",
            |f| f.preco_unitario.clone(),
            |f, v| f.preco_unitario = v,
        )
        .kind(FieldKind::Number)
        .required(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::dialog::{CrudDialog, DialogMode, DialogPhase};
    use crate::shared::list::filter::{apply_filters, FilterState};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contrato(id: i64, numero: &str, fornecedor_id: i64) -> Contrato {
        Contrato {
            id,
            numero: numero.into(),
            fornecedor_id,
            data_inicio: date(2024, 2, 1),
            data_fim: date(2024, 12, 31),
            valor_total: None,
            ativo: true,
        }
    }

    #[test]
    fn test_edit_round_trip() {
        let c = contrato(1, "12/2024", 9);
        let form = Contratos::form_from(&c);
        assert_eq!(form.data_inicio, "2024-02-01");
        assert_eq!(Contratos::to_payload(&form), Ok(ContratoDto::from(&c)));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut form = Contratos::form_from(&contrato(1, "12/2024", 9));
        form.data_fim = "2024-01-15".into();
        assert_eq!(
            Contratos::to_payload(&form),
            Err("A data final deve ser igual ou posterior à data inicial".to_string())
        );
        form.data_fim = String::new();
        assert!(Contratos::to_payload(&form).is_err());
    }

    #[test]
    fn test_fornecedor_filter_from_url() {
        let items = vec![contrato(1, "03/2024", 7), contrato(2, "01/2024", 3), contrato(3, "02/2024", 7)];
        let mut state = FilterState::default();
        state.set_selected("fornecedor_id", "7".into());
        let numeros: Vec<String> = apply_filters(&items, &state, Contratos::default_sort())
            .into_iter()
            .map(|c| c.numero)
            .collect();
        assert_eq!(numeros, vec!["02/2024", "03/2024"]);
    }

    #[test]
    fn test_inline_edit_submits_header_payload() {
        let c = contrato(5, "07/2024", 3);
        let fields = fields(Arc::new(Vec::<(String, String)>::new));
        let mut edit: CrudDialog<ContratoForm> = CrudDialog::default();
        edit.open_edit(c.id, Contratos::form_from(&c));
        assert_eq!(edit.form().fornecedor_id, "3");

        let submission = edit.begin_submit(|f| check_contrato(f, &fields)).unwrap();
        assert_eq!(submission.mode, DialogMode::Edit(5));
        assert_eq!(submission.payload, ContratoDto::from(&c));
        assert!(edit.is_submitting());
    }

    #[test]
    fn test_inline_edit_rejects_reversed_period() {
        let c = contrato(5, "07/2024", 3);
        let fields = fields(Arc::new(Vec::<(String, String)>::new));
        let mut edit: CrudDialog<ContratoForm> = CrudDialog::default();
        edit.open_edit(c.id, Contratos::form_from(&c));
        edit.edit_form(|f| f.data_fim = "2023-12-31".into());

        assert!(edit.begin_submit(|f| check_contrato(f, &fields)).is_none());
        assert_eq!(edit.phase(), DialogPhase::Open);
        assert_eq!(edit.error(), Some("A data final deve ser igual ou posterior à data inicial"));

        edit.edit_form(|f| f.numero.clear());
        edit.begin_submit(|f| check_contrato(f, &fields));
        assert_eq!(edit.error(), Some("O campo \"Número\" é obrigatório."));
        assert!(edit.is_open());
    }

    #[test]
    fn test_vigencia() {
        let c = contrato(1, "12/2024", 9);
        assert_eq!(vigencia(&c, date(2024, 1, 31)), "futuro");
        assert_eq!(vigencia(&c, date(2024, 2, 1)), "vigente");
        assert_eq!(vigencia(&c, date(2024, 12, 31)), "vigente");
        assert_eq!(vigencia(&c, date(2025, 1, 1)), "encerrado");
        assert_eq!(vigencia_label("encerrado"), "Encerrado");
    }

    #[test]
    fn test_item_form() {
        let item = ContratoProduto { id: 4, contrato_id: 1, produto_id: 2, quantidade: 150.5, preco_unitario: 4.2 };
        let form = ItemForm::from_record(&item);
        assert_eq!(form.to_payload(), Ok(ContratoProdutoDto::from(&item)));

        let zero = ItemForm { produto_id: "2".into(), quantidade: "0".into(), preco_unitario: "1".into() };
        assert!(zero.to_payload().is_err());
        let comma = ItemForm { produto_id: "2".into(), quantidade: "10,5".into(), preco_unitario: "3,25".into() };
        assert_eq!(comma.to_payload().map(|p| p.quantidade), Ok(10.5));
    }
}
