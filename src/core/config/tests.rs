use super::*;
use crate::core::errors::RollcallError;
use tempfile::tempdir;

fn expect_validation_error<T: std::fmt::Debug>(result: Result<T>) -> RollcallError {
    result.expect_err("expected validation failure")
}

fn valid_config() -> RollcallConfig {
    let mut config = RollcallConfig::default();
    config.platform.api_id = "12345".into();
    config.platform.api_hash = "0123abcd".into();
    config
}

#[test]
fn defaults_match_documented_layout() {
    let config = RollcallConfig::default();
    assert_eq!(config.paths.male_names, PathBuf::from("genderDB/names_male.txt"));
    assert_eq!(
        config.paths.female_names,
        PathBuf::from("genderDB/names_female.txt")
    );
    assert_eq!(config.paths.output_root, PathBuf::from("chatUsers"));
    assert_eq!(config.platform.page_size, 200);
}

#[test]
fn default_config_requires_credentials() {
    let err = expect_validation_error(RollcallConfig::default().validate());
    assert!(
        format!("{err}").contains("platform.api_id"),
        "unexpected error message: {err}"
    );
}

#[test]
fn config_with_credentials_validates() {
    valid_config().validate().expect("credentials present");
}

#[test]
fn platform_config_rejects_zero_limits() {
    let mut config = valid_config();
    config.platform.page_size = 0;
    let err = expect_validation_error(config.validate());
    assert!(format!("{err}").contains("page_size"));

    config.platform.page_size = 50;
    config.platform.timeout_seconds = 0;
    let err = expect_validation_error(config.validate());
    assert!(format!("{err}").contains("timeout_seconds"));
}

#[test]
fn platform_config_rejects_non_http_endpoint() {
    let mut config = valid_config();
    config.platform.endpoint = "ftp://gateway.local/".into();
    let err = expect_validation_error(config.validate());
    assert!(matches!(err, RollcallError::Validation { .. }));

    config.platform.endpoint = "not a url".into();
    let err = expect_validation_error(config.validate());
    assert!(format!("{err}").contains("platform.endpoint"));
}

#[test]
fn partial_yaml_fills_defaults() {
    let yaml = "platform:\n  api_id: \"1\"\n  api_hash: \"h\"\n";
    let config: RollcallConfig = serde_yaml::from_str(yaml).expect("parse");
    assert_eq!(config.platform.api_id, "1");
    assert_eq!(config.platform.endpoint, "http://127.0.0.1:8081/api/");
    assert_eq!(config.paths, PathsConfig::default());
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rollcall.yml");
    let config = valid_config();

    config.to_yaml_file(&path).expect("write");
    let loaded = RollcallConfig::from_yaml_file(&path).expect("read");
    assert_eq!(loaded, config);
}

#[test]
fn missing_yaml_file_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = RollcallConfig::from_yaml_file(dir.path().join("absent.yml"))
        .expect_err("missing file");
    assert!(matches!(err, RollcallError::Io { .. }));
}
