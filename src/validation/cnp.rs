//! Personal numeric code (CNP) validation
//!
//! A CNP is 13 digits: `S YY MM DD JJ NNN C`, where `S` encodes sex and
//! birth century, `YYMMDD` the birth date, `JJ` the issuing region, `NNN` a
//! sequence number and `C` a weighted checksum over the first twelve digits.

use chrono::NaiveDate;

/// Number of digits in a CNP
pub const CNP_LENGTH: usize = 13;

/// Checksum weights applied to the first twelve digits
const WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Check a CNP for format, birth date, region, sequence and checksum
pub fn validate_cnp(cnp: &str) -> bool {
    let Some(digits) = parse_digits(cnp) else {
        return false;
    };

    let Some(century) = century_offset(digits[0]) else {
        return false;
    };

    let year = century + pair(&digits, 1);
    let month = pair(&digits, 3);
    let day = pair(&digits, 5);
    if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
        return false;
    }

    let region = pair(&digits, 7);
    if !is_valid_region(region) {
        return false;
    }

    let sequence = digits[9] * 100 + digits[10] * 10 + digits[11];
    if !(1..=999).contains(&sequence) {
        return false;
    }

    control_digit(&digits) == digits[12]
}

/// Compute the control digit for the first twelve digits of a CNP
///
/// Returns `None` if the input does not start with twelve ASCII digits.
pub fn cnp_control_digit(prefix: &str) -> Option<u32> {
    let bytes = prefix.as_bytes();
    if bytes.len() < 12 || !bytes[..12].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u32; CNP_LENGTH];
    for (slot, b) in digits.iter_mut().zip(&bytes[..12]) {
        *slot = u32::from(b - b'0');
    }
    Some(control_digit(&digits))
}

fn parse_digits(cnp: &str) -> Option<[u32; CNP_LENGTH]> {
    let bytes = cnp.as_bytes();
    if bytes.len() != CNP_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u32; CNP_LENGTH];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = u32::from(b - b'0');
    }
    Some(digits)
}

fn century_offset(sex_digit: u32) -> Option<u32> {
    match sex_digit {
        1 | 2 => Some(1900),
        3 | 4 => Some(1800),
        5..=8 => Some(2000),
        _ => None,
    }
}

fn pair(digits: &[u32; CNP_LENGTH], at: usize) -> u32 {
    digits[at] * 10 + digits[at + 1]
}

fn is_valid_region(region: u32) -> bool {
    (1..=46).contains(&region) || region == 51 || region == 52
}

fn control_digit(digits: &[u32; CNP_LENGTH]) -> u32 {
    let sum: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
    match sum % 11 {
        10 => 1,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &[
        "1960529460012",
        "2961215040023",
        "1900228400040",
        "5000229400019",
        "1800101400104",
        "6000101510016",
        "7000101520015",
        "3850315230017",
        "1960529120011",
    ];

    #[test]
    fn test_valid_cnps() {
        for cnp in VALID {
            assert!(validate_cnp(cnp), "{} should be valid", cnp);
        }
    }

    #[test]
    fn test_changing_control_digit_invalidates() {
        for cnp in VALID {
            let prefix = &cnp[..12];
            let good = cnp.as_bytes()[12] - b'0';
            for d in 0..10u8 {
                if d == good {
                    continue;
                }
                let mutated = format!("{}{}", prefix, d);
                assert!(!validate_cnp(&mutated), "{} should be invalid", mutated);
            }
        }
    }

    #[test]
    fn test_control_digit_matches_last_digit() {
        for cnp in VALID {
            let expected = u32::from(cnp.as_bytes()[12] - b'0');
            assert_eq!(cnp_control_digit(cnp), Some(expected));
        }
        assert_eq!(cnp_control_digit("12345"), None);
        assert_eq!(cnp_control_digit("19605294600x"), None);
    }

    #[test]
    fn test_remainder_ten_maps_to_one() {
        // weighted sum of 196052912001 is 10 mod 11
        assert_eq!(cnp_control_digit("196052912001"), Some(1));
        assert!(validate_cnp("1960529120011"));
        assert!(!validate_cnp("1960529120010"));
    }

    #[test]
    fn test_format_rejections() {
        assert!(!validate_cnp(""));
        assert!(!validate_cnp("196052946001"));
        assert!(!validate_cnp("19605294600123"));
        assert!(!validate_cnp("19605294600a2"));
        assert!(!validate_cnp(" 960529460012"));
    }

    #[test]
    fn test_sex_digit_rejections() {
        assert!(!validate_cnp("0960529460012"));
        assert!(!validate_cnp("9960529460012"));
    }

    #[test]
    fn test_impossible_date_rejected() {
        // 2002-02-29 does not exist, checksum is otherwise correct
        assert_eq!(cnp_control_digit("502022940003"), Some(1));
        assert!(!validate_cnp("5020229400031"));
    }

    #[test]
    fn test_region_rejected() {
        // region 47, checksum is otherwise correct
        assert_eq!(cnp_control_digit("196052947001"), Some(1));
        assert!(!validate_cnp("1960529470011"));
    }

    #[test]
    fn test_zero_sequence_rejected() {
        assert_eq!(cnp_control_digit("196052946000"), Some(4));
        assert!(!validate_cnp("1960529460004"));
    }
}
