//! FCFA amount formatting
//!
//! Amounts are whole francs; the currency has no subunit in use.

/// Format an amount the way the dashboards print it: `25 000 FCFA`.
pub fn format_fcfa(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{} FCFA", grouped)
}

#[cfg(test)]
mod tests {
    use super::format_fcfa;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_fcfa(25_000), "25 000 FCFA");
        assert_eq!(format_fcfa(1_250_000), "1 250 000 FCFA");
    }

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(format_fcfa(0), "0 FCFA");
        assert_eq!(format_fcfa(999), "999 FCFA");
    }
}
