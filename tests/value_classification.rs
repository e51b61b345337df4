use fldarklint::error::LintError;
use fldarklint::grammar::Grammar;
use fldarklint::path::FilePath;
use fldarklint::value::{Number, Value};

#[test]
fn decimal_keeps_its_precision() {
    let value = Value::classify("-12.340").unwrap();
    assert_eq!(value, Value::Number(Number::new(-12.34, 3)));
    assert_eq!(value.to_string(), "-12.340");
}

#[test]
fn numbers_render_as_written() {
    for raw in ["0", "7", "-3", "196609", "0.5", "1.000", "-0.25", "90.0"] {
        let value = Value::classify(raw).unwrap();
        assert!(value.as_number().is_some(), "{raw} should be a number");
        assert_eq!(value.to_string(), raw);
    }
}

#[test]
fn integer_has_zero_precision() {
    let number = Value::classify("42").unwrap().as_number().expect("number");
    assert_eq!(number.precision(), 0);
    assert_eq!(number.value(), 42.0);
}

#[test]
fn non_numeric_tokens_stay_strings() {
    // empty, several points, inner minus, letters and paths are all text
    for raw in ["", "1.2.3", "1-2", "-", ".5", "li01", "Li01_01_Base", "data\\bases\\a.ini", "12a"] {
        let value = Value::classify(raw).unwrap();
        assert_eq!(value, Value::String(raw.to_string()), "{raw} should be a string");
        assert_eq!(value.to_string(), raw);
    }
}

#[test]
fn out_of_range_number_is_rejected() {
    let raw = format!("1{}", "0".repeat(400));
    let err = Value::classify(&raw).unwrap_err();
    assert!(matches!(err, LintError::Parse { .. }), "{err}");
    let err = Value::classify(&format!("-{raw}.5")).unwrap_err();
    assert!(matches!(err, LintError::Parse { .. }), "{err}");
}

#[test]
fn trailing_point_is_a_number_without_fraction() {
    let value = Value::classify("5.").unwrap();
    assert_eq!(value, Value::Number(Number::new(5.0, 0)));
    assert_eq!(value.to_string(), "5");
}

#[test]
fn integer_reading_follows_rendering() {
    assert_eq!(Value::classify("7").unwrap().as_i64(), Some(7));
    assert_eq!(Value::classify("-15").unwrap().as_i64(), Some(-15));
    assert_eq!(Value::classify("7.0").unwrap().as_i64(), None);
    assert_eq!(Value::classify("seven").unwrap().as_i64(), None);
}

#[test]
fn explicit_grammar_classifies_like_shared() {
    let grammar = Grammar::new();
    for raw in ["3.14", "abc", "-1"] {
        assert_eq!(
            Value::classify_with(&grammar, raw).unwrap(),
            Value::classify(raw).unwrap()
        );
    }
}

#[test]
fn lower_case_rendering() {
    assert_eq!(Value::classify("Li01").unwrap().to_lower(), "li01");
    assert_eq!(Value::classify("Li01").unwrap().as_str(), Some("Li01"));
    assert_eq!(Value::classify("10").unwrap().as_str(), None);
}

#[test]
fn path_is_normalized_both_ways() {
    let path = FilePath::new("DATA\\BASES\\alpha.ini");
    assert_eq!(path.as_str(), "data/bases/alpha.ini");
    assert_eq!(path.to_slash(), "data/bases/alpha.ini");
    assert_eq!(path.to_backslash(), "data\\bases\\alpha.ini");
    assert_eq!(FilePath::new("data/bases/ALPHA.ini"), path);
}
