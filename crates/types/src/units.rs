//! Human-readable token amounts.

use alloy::primitives::U256;

/// Format an amount of smallest units as a decimal string with `precision`
/// fractional digits and `,` thousands separators.
///
/// Rounds half up. `format_units(U256::from(1_234_567_890), 6, 2)` is
/// `"1,234.57"`.
pub fn format_units(amount: U256, decimals: u8, precision: u8) -> String {
    let scaled = if precision < decimals {
        let divisor = pow10(decimals - precision);
        let half = divisor / U256::from(2);
        amount.saturating_add(half) / divisor
    } else {
        amount.saturating_mul(pow10(precision - decimals))
    };

    let unit = pow10(precision);
    let whole = group_thousands(&(scaled / unit).to_string());
    if precision == 0 {
        return whole;
    }

    let frac = (scaled % unit).to_string();
    format!("{whole}.{frac:0>width$}", width = precision as usize)
}

fn pow10(exp: u8) -> U256 {
    U256::from(10).pow(U256::from(exp))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usdc_amounts() {
        assert_eq!(format_units(U256::from(2_500_000), 6, 2), "2.50");
        assert_eq!(format_units(U256::from(1_000_000), 6, 2), "1.00");
        assert_eq!(format_units(U256::ZERO, 6, 2), "0.00");
        assert_eq!(format_units(U256::from(1), 6, 2), "0.00");
        assert_eq!(format_units(U256::from(5_000), 6, 2), "0.01");
        assert_eq!(format_units(U256::from(1_234_567_890), 6, 2), "1,234.57");
        assert_eq!(format_units(U256::from(1_000_000_000_000u64), 6, 2), "1,000,000.00");
    }

    #[test]
    fn precision_beyond_decimals() {
        assert_eq!(format_units(U256::from(15), 1, 3), "1.500");
        assert_eq!(format_units(U256::from(123_456), 0, 0), "123,456");
    }

    #[test]
    fn ether_amounts() {
        let one_and_a_half = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_units(one_and_a_half, 18, 4), "1.5000");
    }
}
