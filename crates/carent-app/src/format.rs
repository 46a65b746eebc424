//! Indonesian (id-ID) price and date formatting

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Rupiah amount, e.g. `Rp 350.000,00` (non-breaking space after `Rp`)
pub fn format_price(price: u64) -> String {
    format!("Rp\u{a0}{},00", group_thousands(price))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Long form, e.g. `15 Oktober 2026`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Numeric form, e.g. `15/10/2026`
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(350_000), "Rp\u{a0}350.000,00");
        assert_eq!(format_price(1_500_000), "Rp\u{a0}1.500.000,00");
        assert_eq!(format_price(0), "Rp\u{a0}0,00");
        assert_eq!(format_price(999), "Rp\u{a0}999,00");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(format_date(date), "15 Oktober 2026");
        assert_eq!(format_date_short(date), "15/10/2026");
    }

    #[test]
    fn test_short_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date_short(date), "5/1/2025");
        assert_eq!(format_date(date), "5 Januari 2025");
    }
}
