/// Date helpers for pt-BR display
use chrono::{Datelike, NaiveDate};

pub fn format_naive(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

pub fn format_opt(date: Option<NaiveDate>) -> String {
    date.map(format_naive).unwrap_or_else(|| "—".to_string())
}

/// ISO form used by `<input type="date">`
pub fn to_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub const MESES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro", "Outubro",
    "Novembro", "Dezembro",
];

pub fn month_name(mes: u32) -> &'static str {
    match mes {
        1..=12 => MESES[(mes - 1) as usize],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(format_naive(d), "07/01/2025");
        assert_eq!(to_input(d), "2025-01-07");
        assert_eq!(format_opt(None), "—");
    }

    #[test]
    fn test_months() {
        assert_eq!(month_name(3), "Março");
        assert_eq!(month_name(13), "");
    }
}
