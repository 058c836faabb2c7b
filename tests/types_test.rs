use email_signature::*;

// --- Delimiter ---

#[test]
fn test_delimiter_lf() {
    assert_eq!(Delimiter::detect("a\nb\r\nc"), Delimiter::Lf);
    assert_eq!(Delimiter::detect("a\n"), Delimiter::Lf);
}

#[test]
fn test_delimiter_crlf() {
    assert_eq!(Delimiter::detect("a\r\nb\nc"), Delimiter::CrLf);
    assert_eq!(Delimiter::detect("a\rb\r\nc"), Delimiter::CrLf);
}

#[test]
fn test_delimiter_default() {
    assert_eq!(Delimiter::detect(""), Delimiter::Lf);
    assert_eq!(Delimiter::detect("no breaks\r"), Delimiter::Lf);
    assert_eq!(Delimiter::default(), Delimiter::Lf);
}

#[test]
fn test_delimiter_display() {
    assert_eq!(Delimiter::CrLf.to_string(), "\r\n");
    assert_eq!(Delimiter::Lf.as_str(), "\n");
}

// --- SignatureConfig ---

#[test]
fn test_config_defaults() {
    let config = SignatureConfig::default();
    assert_eq!(config.max_lines, SIGNATURE_MAX_LINES);
    assert_eq!(config.too_long_line, TOO_LONG_SIGNATURE_LINE);
    assert_eq!(config.max_lines, 11);
    assert_eq!(config.too_long_line, 80);
    assert!(config.strip_boilerplate);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builders() {
    let config = SignatureConfig::default()
        .with_max_lines(3)
        .with_too_long_line(40)
        .with_boilerplate_stripping(false);
    assert_eq!(config.max_lines, 3);
    assert_eq!(config.too_long_line, 40);
    assert!(!config.strip_boilerplate);
}

#[test]
fn test_config_rejects_zero_max_lines() {
    let err = SignatureConfig::default().with_max_lines(0).validate().unwrap_err();
    assert_eq!(err.to_string(), "Invalid configuration: max_lines must be greater than 0");
}

#[test]
fn test_config_partial_json() {
    let config: SignatureConfig = serde_json::from_str(r#"{"too_long_line": 60}"#).unwrap();
    assert_eq!(config.too_long_line, 60);
    assert_eq!(config.max_lines, SIGNATURE_MAX_LINES);
    assert!(config.strip_boilerplate);
}

#[test]
fn test_config_json_round_trip() {
    let config = SignatureConfig::default().with_max_lines(5);
    let json = serde_json::to_string(&config).unwrap();
    let back: SignatureConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

// --- Extraction ---

#[test]
fn test_extraction_unsigned() {
    let extraction = Extraction::unsigned("Hey man!");
    assert_eq!(extraction.text, "Hey man!");
    assert!(!extraction.has_signature());
}

#[test]
fn test_extraction_serializes_missing_signature_as_null() {
    let extraction = extract_signature("Hey man!");
    let json = serde_json::to_value(&extraction).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "Hey man!", "signature": null }));
}

#[test]
fn test_extraction_serializes_signature() {
    let extraction = extract_signature("Hey!\n-roman");
    assert!(extraction.has_signature());
    let json = serde_json::to_value(&extraction).unwrap();
    assert_eq!(json["signature"], "-roman");
}

// --- Marker ---

#[test]
fn test_marker_chars() {
    assert_eq!(Marker::Candidate.as_char(), 'c');
    assert_eq!(Marker::Dashed.as_char(), 'd');
    assert_eq!(Marker::TooLong.to_string(), "l");
}

// --- signature_start ---

#[test]
fn test_signature_start() {
    assert_eq!(signature_start("Blah\n\nregards\n\nJohn Doe"), Some(6));
    assert_eq!(signature_start("Wifi not working.\n\n--\nP"), Some(19));
    assert_eq!(signature_start("Roman"), None);
}
