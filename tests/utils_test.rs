//! Integration tests for the validation, formatting and text helpers
//!
//! Each helper is checked against a typed table of inputs and expected
//! outputs through the public crate API.

use verktyg::{
    format_price, genitive, is_lower_case, make_heading, validate_email, validate_zip, UtilError,
};

#[test]
fn test_validate_email_table() {
    let cases = vec![
        ("jonatan@gmail.com", true),
        ("jonatan@gmail", false),
        ("jonatan.com", false),
    ];

    for (input, expected) in cases {
        assert_eq!(validate_email(input), expected, "validate_email({:?})", input);
    }
}

#[test]
fn test_validate_zip_table() {
    let cases = vec![
        ("12345", true),
        ("1234", false),
        ("123456", false),
        ("abcde", false),
    ];

    for (input, expected) in cases {
        assert_eq!(validate_zip(input), expected, "validate_zip({:?})", input);
    }
}

#[test]
fn test_validate_zip_length_counts_utf16_units() {
    // Ideographic space is three bytes but one unit, and is trimmed as whitespace
    assert!(validate_zip("1234\u{3000}"));
    assert!(!validate_zip("123\u{1F600}"));
}

#[test]
fn test_make_heading_table() {
    let cases = vec![
        ("Hello", 1, "<h1>Hello</h1>"),
        ("Next level", 2, "<h2>Next level</h2>"),
        ("Next level", 3, "<h3>Next level</h3>"),
    ];

    for (title, level, expected) in cases {
        assert_eq!(
            make_heading(title, level).unwrap(),
            expected,
            "make_heading({:?}, {})",
            title,
            level
        );
    }
}

#[test]
fn test_make_heading_out_of_range_errors() {
    let err = make_heading("Hello", 0).unwrap_err();
    assert_eq!(err, UtilError::InvalidHeadingLevel(0));
    assert!(err.to_string().starts_with("Heading level must be between 1 and 6"));

    assert!(make_heading("Hello", 7).is_err());
}

#[test]
fn test_format_price_table() {
    let cases: Vec<(f64, Option<&str>, &str)> = vec![
        (232.10542, None, "232.11 SEK"),
        (14.0, None, "14.00 SEK"),
        (1024.2048, None, "1024.20 SEK"),
        (25.743, Some("NOK"), "25.74 NOK"),
        (500.50, Some("EUR"), "500.50 EUR"),
        (25.7456, Some("USD"), "25.75 USD"),
        (232.10542, Some("%PRICE% kr"), "232.11 kr"),
        (14.0, Some("%PRICE% kr"), "14.00 kr"),
        (1024.2048, Some("USD %PRICE%"), "USD 1024.20"),
    ];

    for (amount, pattern, expected) in cases {
        assert_eq!(
            format_price(amount, pattern),
            expected,
            "format_price({}, {:?})",
            amount,
            pattern
        );
    }
}

#[test]
fn test_format_price_replaces_only_first_placeholder() {
    assert_eq!(
        format_price(14.0, Some("%PRICE% (%PRICE%)")),
        "14.00 (%PRICE%)"
    );
}

#[test]
fn test_is_lower_case_table() {
    let cases = vec![
        ("jonatan", true),
        ("JONATAN", false),
        ("Jonatan", false),
        ("jOnAtAn", false),
    ];

    for (input, expected) in cases {
        assert_eq!(is_lower_case(input), expected, "is_lower_case({:?})", input);
    }
}

#[test]
fn test_genitive_table() {
    let cases = vec![
        ("Jonatan", "Jonatans"),
        ("Elis", "Elis"),
        ("Anna", "Annas"),
    ];

    for (input, expected) in cases {
        assert_eq!(genitive(input), expected, "genitive({:?})", input);
    }
}

#[test]
fn test_helpers_are_repeatable() {
    assert_eq!(validate_email("a@b.com"), validate_email("a@b.com"));
    assert_eq!(validate_zip("12.34"), validate_zip("12.34"));
    assert_eq!(make_heading("Hi", 4), make_heading("Hi", 4));
    assert_eq!(
        format_price(25.7456, Some("USD")),
        format_price(25.7456, Some("USD"))
    );
    assert_eq!(is_lower_case("Åsa"), is_lower_case("Åsa"));
    assert_eq!(genitive("Lars"), genitive("Lars"));
}
