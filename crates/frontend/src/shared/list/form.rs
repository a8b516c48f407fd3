//! Form field descriptors and value coercion for edit dialogs

use std::sync::Arc;

use chrono::NaiveDate;

/// Options of a select input, `(value, label)`
pub type OptionsFn = Arc<dyn Fn() -> Vec<(String, String)> + Send + Sync>;

#[derive(Clone)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Date,
    TextArea,
    Checkbox,
    Select(OptionsFn),
    /// Checkbox group stored as comma separated keys
    MultiSelect(OptionsFn),
}

/// Accessors into the form struct
pub enum FieldAccess<F> {
    Text {
        get: fn(&F) -> String,
        set: fn(&mut F, String),
    },
    Flag {
        get: fn(&F) -> bool,
        set: fn(&mut F, bool),
    },
}

impl<F> Clone for FieldAccess<F> {
    fn clone(&self) -> Self {
        match self {
            FieldAccess::Text { get, set } => FieldAccess::Text { get: *get, set: *set },
            FieldAccess::Flag { get, set } => FieldAccess::Flag { get: *get, set: *set },
        }
    }
}

/// One input of an edit form
pub struct FormField<F> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub access: FieldAccess<F>,
}

impl<F> Clone for FormField<F> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            kind: self.kind.clone(),
            required: self.required,
            access: self.access.clone(),
        }
    }
}

impl<F> FormField<F> {
    pub fn text(key: &'static str, label: &'static str, get: fn(&F) -> String, set: fn(&mut F, String)) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
            access: FieldAccess::Text { get, set },
        }
    }

    pub fn checkbox(key: &'static str, label: &'static str, get: fn(&F) -> bool, set: fn(&mut F, bool)) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Checkbox,
            required: false,
            access: FieldAccess::Flag { get, set },
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_blank(&self, form: &F) -> bool {
        match &self.access {
            FieldAccess::Text { get, .. } => get(form).trim().is_empty(),
            FieldAccess::Flag { .. } => false,
        }
    }
}

/// First missing required field, in declaration order
pub fn validate_required<F>(form: &F, fields: &[FormField<F>]) -> Result<(), String> {
    match fields.iter().find(|f| f.required && f.is_blank(form)) {
        Some(field) => Err(format!("O campo \"{}\" é obrigatório.", field.label)),
        None => Ok(()),
    }
}

pub fn opt_to_string(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn string_to_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn id_to_string(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Empty means no reference
pub fn parse_opt_id(value: &str, label: &str) -> Result<Option<i64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("Selecione um valor válido para \"{}\".", label))
}

pub fn parse_id(value: &str, label: &str) -> Result<i64, String> {
    parse_opt_id(value, label)?.ok_or_else(|| format!("O campo \"{}\" é obrigatório.", label))
}

/// Decimal with either `,` or `.` as separator
pub fn parse_decimal(value: &str, label: &str) -> Result<f64, String> {
    let normalized = value.trim().replace(',', ".");
    if normalized.is_empty() {
        return Ok(0.0);
    }
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("O campo \"{}\" deve ser numérico.", label)),
    }
}

pub fn parse_opt_decimal(value: &str, label: &str) -> Result<Option<f64>, String> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_decimal(value, label).map(Some)
    }
}

pub fn decimal_to_string(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub fn parse_integer(value: &str, label: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("O campo \"{}\" deve ser um número inteiro.", label))
}

/// Comma separated keys of a multi-select field
pub fn join_keys<T: ToString>(keys: &[T]) -> String {
    keys.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

pub fn has_key(joined: &str, key: &str) -> bool {
    joined.split(',').any(|k| k.trim() == key)
}

/// Adds `key` when absent, removes it otherwise
pub fn toggle_key(joined: &str, key: &str) -> String {
    let mut keys: Vec<&str> = joined.split(',').map(str::trim).filter(|k| !k.is_empty()).collect();
    match keys.iter().position(|k| *k == key) {
        Some(pos) => {
            keys.remove(pos);
        }
        None => keys.push(key),
    }
    keys.join(",")
}

pub fn parse_id_list(joined: &str, label: &str) -> Result<Vec<i64>, String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| parse_id(k, label))
        .collect()
}

/// ISO `yyyy-mm-dd` as produced by `<input type="date">`
pub fn parse_date(value: &str, label: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("O campo \"{}\" é obrigatório.", label));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| format!("Data inválida em \"{}\".", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Form {
        nome: String,
        email: String,
        ativo: bool,
    }

    fn fields() -> Vec<FormField<Form>> {
        type Field = FormField<Form>;
        vec![
            Field::text("nome", "Nome", |f| f.nome.clone(), |f, v| f.nome = v).required(),
            Field::text("email", "E-mail", |f| f.email.clone(), |f, v| f.email = v).kind(FieldKind::Email),
            Field::checkbox("ativo", "Ativo", |f| f.ativo, |f, v| f.ativo = v),
        ]
    }

    #[test]
    fn test_required_fields() {
        let mut form = Form::default();
        assert_eq!(validate_required(&form, &fields()), Err("O campo \"Nome\" é obrigatório.".to_string()));
        form.nome = "   ".into();
        assert!(validate_required(&form, &fields()).is_err());
        form.nome = "Escola Municipal".into();
        assert_eq!(validate_required(&form, &fields()), Ok(()));
    }

    #[test]
    fn test_access_setters() {
        let mut form = Form::default();
        for field in fields() {
            match field.access {
                FieldAccess::Text { set, .. } => set(&mut form, field.key.to_uppercase()),
                FieldAccess::Flag { set, .. } => set(&mut form, true),
            }
        }
        assert_eq!(form.nome, "NOME");
        assert_eq!(form.email, "EMAIL");
        assert!(form.ativo);
    }

    #[test]
    fn test_coercions() {
        assert_eq!(opt_to_string(&None), "");
        assert_eq!(string_to_opt("  "), None);
        assert_eq!(string_to_opt(" a "), Some("a".to_string()));
        assert_eq!(parse_decimal("12,5", "Preço"), Ok(12.5));
        assert_eq!(parse_decimal("", "Preço"), Ok(0.0));
        assert!(parse_decimal("abc", "Preço").is_err());
        assert_eq!(parse_opt_id("", "Rota"), Ok(None));
        assert_eq!(parse_opt_id("4", "Rota"), Ok(Some(4)));
        assert!(parse_id("", "Fornecedor").is_err());
        assert_eq!(decimal_to_string(5.0), "5");
        assert_eq!(decimal_to_string(2.75), "2.75");
        assert_eq!(parse_date("2024-02-29", "Início"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(parse_date("29/02/2024", "Início").is_err());
    }

    #[test]
    fn test_multi_select_keys() {
        let joined = join_keys(&[3, 1]);
        assert_eq!(joined, "3,1");
        assert!(has_key(&joined, "1"));
        assert!(!has_key(&joined, "2"));
        assert_eq!(toggle_key(&joined, "3"), "1");
        assert_eq!(toggle_key("", "5"), "5");
        assert_eq!(parse_id_list("3, 1", "Modalidades"), Ok(vec![3, 1]));
        assert_eq!(parse_id_list("", "Modalidades"), Ok(vec![]));
        assert!(parse_id_list("3,x", "Modalidades").is_err());
    }
}
