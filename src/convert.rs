/// One converted integer, keyed by its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub index: usize,
    pub decimal: i64,
    pub binary: String,
    pub hex: String,
}

/// Converts each integer, in input order, to binary and uppercase
/// hexadecimal text. Negative inputs convert by magnitude: the digits of
/// `unsigned_abs` appear and the sign does not.
pub fn convert_numbers(numbers: &[i64]) -> Vec<Conversion> {
    numbers
        .iter()
        .enumerate()
        .map(|(i, &n)| Conversion {
            index: i + 1,
            decimal: n,
            binary: format!("{:b}", n.unsigned_abs()),
            hex: format!("{:X}", n.unsigned_abs()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_in_input_order_with_one_based_indices() {
        let conversions = convert_numbers(&[3, 5, 7]);
        assert_eq!(
            conversions,
            vec![
                Conversion { index: 1, decimal: 3, binary: "11".into(), hex: "3".into() },
                Conversion { index: 2, decimal: 5, binary: "101".into(), hex: "5".into() },
                Conversion { index: 3, decimal: 7, binary: "111".into(), hex: "7".into() },
            ]
        );
    }

    #[test]
    fn hex_digits_are_uppercase() {
        let conversions = convert_numbers(&[255, 3054]);
        assert_eq!(conversions[0].hex, "FF");
        assert_eq!(conversions[1].hex, "BEE");
    }

    #[test]
    fn zero_converts_to_single_digit() {
        let conversions = convert_numbers(&[0]);
        assert_eq!(conversions[0].binary, "0");
        assert_eq!(conversions[0].hex, "0");
    }

    #[test]
    fn negative_numbers_keep_only_the_magnitude_digits() {
        let conversions = convert_numbers(&[-5]);
        assert_eq!(conversions[0].decimal, -5);
        assert_eq!(conversions[0].binary, "101");
        assert_eq!(conversions[0].hex, "5");
    }

    #[test]
    fn i64_min_magnitude_does_not_overflow() {
        let conversions = convert_numbers(&[i64::MIN]);
        assert_eq!(conversions[0].hex, "8000000000000000");
    }

    #[test]
    fn round_trips_recover_non_negative_inputs() {
        for n in [0i64, 1, 2, 9, 42, 4096, 65535, i64::MAX] {
            let c = &convert_numbers(&[n])[0];
            assert_eq!(i64::from_str_radix(&c.binary, 2).unwrap(), n);
            assert_eq!(i64::from_str_radix(&c.hex, 16).unwrap(), n);
        }
    }
}
