//! # Configuration Tests

use mirfak_ucontrol::GenError;
use mirfak_ucontrol::GeneratorConfig;
use mirfak_ucontrol::table::emit::BANNER;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.banner, BANNER);
    assert!(config.verify_after_write);
    config.validate().unwrap();
}

#[test]
fn test_empty_document_takes_defaults() {
    assert_eq!(GeneratorConfig::from_json("{}").unwrap(), GeneratorConfig::default());
}

#[test]
fn test_partial_document() {
    let config = GeneratorConfig::from_json(r#"{ "banner": "// rom image" }"#).unwrap();
    assert_eq!(config.banner, "// rom image");
    assert!(config.verify_after_write);

    let config = GeneratorConfig::from_json(r#"{ "verify_after_write": false }"#).unwrap();
    assert_eq!(config.banner, BANNER);
    assert!(!config.verify_after_write);
}

#[rstest]
#[case("{")]
#[case(r#"{ "banner": 7 }"#)]
#[case(r#"{ "output": "ucontrol.mem" }"#)]
fn test_malformed_document(#[case] json: &str) {
    let err = GeneratorConfig::from_json(json).unwrap_err();
    assert!(matches!(err, GenError::Config(_)), "{err:?}");
}

#[rstest]
#[case("// two\n// lines", "single line")]
#[case("// carriage\r", "single line")]
#[case("# not a comment", "must start with `//`")]
#[case("", "must start with `//`")]
fn test_invalid_banner(#[case] banner: &str, #[case] message: &str) {
    let config = GeneratorConfig {
        banner: banner.to_owned(),
        ..GeneratorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, GenError::InvalidConfig(_)), "{err:?}");
    assert!(err.to_string().contains(message), "{err}");
}

#[test]
fn test_from_json_validates() {
    let err = GeneratorConfig::from_json(r##"{ "banner": "# rom" }"##).unwrap_err();
    assert!(matches!(err, GenError::InvalidConfig(_)), "{err:?}");
}
