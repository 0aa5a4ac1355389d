//! Currency formatting shared by the console display and the PDF document
//!
//! Both surfaces go through `kshs`, so every amount a client sees on screen
//! matches the document line for line.

use rust_decimal::Decimal;

/// Format an amount as `KShs 1,234,567.89`
pub fn kshs(amount: Decimal) -> String {
    format!("KShs {}", amount_2dp(amount))
}

/// Two-decimal, comma-grouped amount without the currency prefix
pub fn amount_2dp(amount: Decimal) -> String {
    // round_dp uses banker's rounding, same as the display layer has always
    // shown these figures
    group_thousands(&format!("{:.2}", amount.round_dp(2)))
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(unsigned.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
