// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

pub fn format_rupees(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{}", comma_format(amount.unsigned_abs()))
}

/// Day-first date, the way fleet paperwork (insurance, permits, PUC) prints it.
pub fn format_date(value: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        value.day(),
        u8::from(value.month()),
        value.year()
    )
}

pub fn format_days(days: u32) -> String {
    format!("{days} days")
}

pub fn format_kg(kg: u32) -> String {
    format!("{} kg", comma_format(u64::from(kg)))
}

pub fn format_km(km: u64) -> String {
    format!("{} km", comma_format(km))
}

pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_owned()
    }
}

fn comma_format(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_days, format_decimal, format_kg, format_km, format_rupees};
    use time::{Date, Month};

    #[test]
    fn rupees_use_thousands_separators() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(45_000), "₹45,000");
        assert_eq!(format_rupees(1_234_567), "₹1,234,567");
        assert_eq!(format_rupees(-5_000), "-₹5,000");
    }

    #[test]
    fn dates_are_day_first() {
        let date = Date::from_calendar_date(2024, Month::January, 1).expect("valid date");
        assert_eq!(format_date(date), "01/01/2024");
        let date = Date::from_calendar_date(2025, Month::November, 28).expect("valid date");
        assert_eq!(format_date(date), "28/11/2025");
    }

    #[test]
    fn units_are_appended() {
        assert_eq!(format_days(30), "30 days");
        assert_eq!(format_kg(16_000), "16,000 kg");
        assert_eq!(format_km(458_200), "458,200 km");
    }

    #[test]
    fn decimals_drop_trailing_zeros() {
        assert_eq!(format_decimal(3.5), "3.5");
        assert_eq!(format_decimal(4.0), "4");
        assert_eq!(format_decimal(2.126), "2.13");
    }
}
