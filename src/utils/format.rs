//! Formateo de valores para la capa de presentación
//!
//! Helpers puros de formateo que consumen la UI y el informe de listado.

use rust_decimal::Decimal;

/// Formatea un precio con dos decimales y símbolo de euro
pub fn format_price(price: Decimal) -> String {
    format!("{:.2} €", price)
}

/// Formatea un kilometraje con separador de miles y sufijo "km"
pub fn format_kilometers(kilometers: i64) -> String {
    format!("{} km", group_thousands(kilometers))
}

/// Agrupa un entero en bloques de tres dígitos separados por punto
fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
