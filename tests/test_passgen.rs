use rpassgen::passgen::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_selection() {
        let selection = CharSelection::default();
        let password = generate(&selection, 16).unwrap();
        assert_eq!(password.chars().count(), 16);
        // Default selection excludes symbols, so every character comes from
        // the alphanumeric union.
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_symbols_only() {
        let selection = CharSelection {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: true,
        };
        let password = generate(&selection, 12).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_generate_no_classes_selected() {
        let selection = CharSelection {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
        };
        let result = generate(&selection, 16);
        assert_eq!(result, Err(GenError::NoCharacterClassSelected));
    }

    #[test]
    fn test_generate_length_bounds() {
        let selection = CharSelection::default();
        assert_eq!(generate(&selection, 7), Err(GenError::InvalidLength(7)));
        assert_eq!(generate(&selection, 65), Err(GenError::InvalidLength(65)));
        assert_eq!(generate(&selection, 8).unwrap().chars().count(), 8);
        assert_eq!(generate(&selection, 64).unwrap().chars().count(), 64);
    }

    #[test]
    fn test_alphabet_assembly_order() {
        let all = CharSelection {
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        };
        let expected = format!("{}{}{}{}", UPPERCASE, LOWERCASE, DIGITS, SYMBOLS);
        assert_eq!(build_alphabet(&all), expected);

        let partial = CharSelection {
            include_uppercase: true,
            include_lowercase: false,
            include_digits: true,
            include_symbols: false,
        };
        assert_eq!(build_alphabet(&partial), format!("{}{}", UPPERCASE, DIGITS));
    }

    #[test]
    fn test_symbol_alphabet_literal() {
        assert_eq!(SYMBOLS.chars().count(), 29);
        assert!(!SYMBOLS.contains('\''));
        assert!(!SYMBOLS.contains('"'));
        assert!(!SYMBOLS.contains('\\'));
    }

    #[test]
    fn test_union_membership_upper_lower_digit() {
        let selection = CharSelection {
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: false,
        };
        for _ in 0..20 {
            let password = generate(&selection, 16).unwrap();
            assert_eq!(password.chars().count(), 16);
            assert!(password.chars().all(|c| {
                UPPERCASE.contains(c) || LOWERCASE.contains(c) || DIGITS.contains(c)
            }));
        }
    }
}
