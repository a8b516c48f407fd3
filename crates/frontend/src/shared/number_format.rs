//! pt-BR number formatting: "." groups thousands, "," separates decimals

/// Formats with a thousands separator and a fixed number of decimals
///
/// ```text
/// format_decimal(1234.567, 2) == "1.234,57"
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut integer: String = grouped.chars().rev().collect();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        integer.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{},{}", integer, d),
        None => integer,
    }
}

/// Currency, e.g. "R$ 1.234,50"
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_decimal(value, 2))
}

/// Quantities: integers without decimals, otherwise up to three places
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format_decimal(value, 0)
    } else {
        let s = format_decimal(value, 3);
        s.trim_end_matches('0').trim_end_matches(',').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(250.0), "R$ 250,00");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(-15.5), "R$ -15,50");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1000.0, 0), "1.000");
        assert_eq!(format_decimal(999.999, 2), "1.000,00");
        assert_eq!(format_decimal(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2,5");
        assert_eq!(format_quantity(1500.125), "1.500,125");
    }

    #[test]
    fn test_contract_total_is_rendered_in_reais() {
        let itens = [(10.0, 5.0), (2.0, 100.0)];
        let total: f64 = itens.iter().map(|(q, p)| q * p).sum();
        assert_eq!(format_brl(total), "R$ 250,00");
    }
}
