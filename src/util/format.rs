//! Display formatting for currency amounts.

/// Formats an amount as whole dollars with thousands grouping, the way the
/// in-game phone shows payouts: `$1,300,000`. Rounding to whole dollars
/// happens here and nowhere in the engine.
pub fn format_money(value: f64) -> String {
    let rounded = value.round() as i64;
    let grouped = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(950.0), "$950");
        assert_eq!(format_money(25_000.0), "$25,000");
        assert_eq!(format_money(1_300_000.0), "$1,300,000");
    }

    #[test]
    fn rounds_to_whole_dollars() {
        assert_eq!(format_money(330_833.4), "$330,833");
        assert_eq!(format_money(330_833.5), "$330,834");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_dollar() {
        assert_eq!(format_money(-26_000.0), "-$26,000");
    }
}
