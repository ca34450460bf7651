//! Zero-trimming primitives shared by the normalizer and the formatter

/// Strip leading `'0'` characters.
///
/// A string made only of zeros, including a lone `"0"`, trims to `""`.
///
/// # Examples
///
/// ```
/// use wadscale::wad::trim_leading_zeros;
///
/// assert_eq!(trim_leading_zeros("007519820"), "7519820");
/// assert_eq!(trim_leading_zeros("0"), "");
/// ```
pub fn trim_leading_zeros(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

/// Strip trailing `'0'` characters.
///
/// A string made only of zeros trims to `""`.
///
/// # Examples
///
/// ```
/// use wadscale::wad::trim_trailing_zeros;
///
/// assert_eq!(trim_trailing_zeros("200"), "2");
/// assert_eq!(trim_trailing_zeros("0000002"), "0000002");
/// ```
pub fn trim_trailing_zeros(digits: &str) -> &str {
    digits.trim_end_matches('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_leading_zeros() {
        let cases = [
            ("", ""),
            ("0", ""),
            ("00000000000000000000000000", ""),
            ("1", "1"),
            ("3", "3"),
            ("7519820", "7519820"),
            ("0000002", "2"),
            ("00200", "200"),
            ("200", "200"),
        ];
        for (input, expected) in cases {
            assert_eq!(trim_leading_zeros(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_trim_trailing_zeros() {
        let cases = [
            ("", ""),
            ("0", ""),
            ("00000000000000000000000000", ""),
            ("1", "1"),
            ("3", "3"),
            ("7519820", "751982"),
            ("0000002", "0000002"),
            ("00200", "002"),
            ("200", "2"),
        ];
        for (input, expected) in cases {
            assert_eq!(trim_trailing_zeros(input), expected, "input {input:?}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: trimming only removes zeros, and only from one end
            #[test]
            fn test_trims_are_affixes(digits in "[0-9]{0,40}") {
                let leading = trim_leading_zeros(&digits);
                prop_assert!(digits.ends_with(leading));
                prop_assert!(!leading.starts_with('0'));
                prop_assert!(digits[..digits.len() - leading.len()].bytes().all(|b| b == b'0'));

                let trailing = trim_trailing_zeros(&digits);
                prop_assert!(digits.starts_with(trailing));
                prop_assert!(!trailing.ends_with('0'));
                prop_assert!(digits[trailing.len()..].bytes().all(|b| b == b'0'));
            }
        }
    }
}
