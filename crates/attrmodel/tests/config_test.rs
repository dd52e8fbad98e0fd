use attrmodel::{attrs, Model, ModelConfig, ModelError, Schema};
use std::fs;
use tempfile::TempDir;

struct Account;

impl Schema for Account {
    fn config() -> ModelConfig {
        ModelConfig {
            hidden: vec!["password".to_string()],
            ..Default::default()
        }
    }
}

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("account.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_loaded_config_drives_fill_and_export() {
    let (_dir, path) = write_config("fillable = [\"email\", \"password\"]\nhidden = [\"password\", \"token\"]\n");
    let config = ModelConfig::load(&path).unwrap();

    let mut account = Model::<Account>::with_config(&config);
    account.fill(attrs! { "email" => "a@b.c", "password" => "hunter2", "role" => "admin" });
    account.force_fill(attrs! { "token" => "t0k" });

    assert!(account.get_attributes().has("password"));
    assert!(!account.get_attributes().has("role"));
    assert_eq!(account.to_json().unwrap(), r#"{"email":"a@b.c"}"#);
}

#[test]
fn test_empty_config_keeps_schema_policy() {
    let (_dir, path) = write_config("");
    let config = ModelConfig::load(&path).unwrap();

    let account = Model::<Account>::with_config(&config);
    assert_eq!(account.get_hidden(), vec!["password"]);
    assert!(account.get_fillable().is_empty());
}

#[test]
fn test_invalid_config_is_reported() {
    let (_dir, path) = write_config("hidden = 12\n");
    assert!(matches!(ModelConfig::load(&path), Err(ModelError::Config(_))));
}
