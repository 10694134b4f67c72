#[cfg(test)]
mod tests {
    use trimed::utils::sanitize::{
        digits_only, format_cpf, is_valid_cep, is_valid_cpf, is_valid_sus,
    };

    #[test]
    fn test_digits_only_strips_punctuation() {
        assert_eq!(digits_only("529.982.247-25"), "52998224725");
        assert_eq!(digits_only(" 01310-100 "), "01310100");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
        // Wrong length passes through untouched
        assert_eq!(format_cpf("1234"), "1234");
        assert_eq!(format_cpf(""), "");
    }

    #[test]
    fn test_valid_cpf_check_digits() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("11144477735"));
    }

    #[test]
    fn test_invalid_cpfs() {
        // Wrong check digit
        assert!(!is_valid_cpf("52998224724"));
        assert!(!is_valid_cpf("11144477734"));
        // Repeated digit sequences are rejected outright
        assert!(!is_valid_cpf("11111111111"));
        assert!(!is_valid_cpf("00000000000"));
        // Wrong length or non-digits
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf("5299822472a"));
    }

    #[test]
    fn test_sus_and_cep_lengths() {
        assert!(is_valid_sus("123456789012345"));
        assert!(!is_valid_sus("12345678901234"));
        assert!(!is_valid_sus("1234567890123456"));
        assert!(!is_valid_sus("12345678901234x"));

        assert!(is_valid_cep("01310100"));
        assert!(!is_valid_cep("0131010"));
        assert!(!is_valid_cep("013101000"));
        assert!(!is_valid_cep("01310-10"));
    }
}
