//! End to end: records file in, dictionary file out

use std::fs;

use morphodict_config::Config;

use crate::profile::{extend_lexical_tags, load_config, read_profile};
use crate::run;

#[test]
fn test_run_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("dictionary.importjson");
    fs::write(
        &input,
        r#"[
            { "head": "atimwak", "analysis": [[], "atim", ["+N", "+A", "+Pl"]], "definitions": ["dogs"] },
            { "head": "atim", "analysis": [[], "atim", ["+N", "+A", "+Sg"]], "definitions": ["dog"] }
        ]"#,
    )
    .unwrap();
    let mut config = Config::default();
    config.dictionary.lexical_tags = vec!["+N".to_string(), "+A".to_string()];

    run(&input, Some(&output), &config).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.ends_with("]\n"));
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value[0]["slug"], "atim");
    assert_eq!(value[1]["formOf"], "atim");
}

#[test]
fn test_run_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(&dir.path().join("absent.json"), None, &Config::default());
    assert!(result.is_err());
}

#[test]
fn test_load_config_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crkeng.json");
    fs::write(
        &path,
        r#"{ "dictionary": { "lexical_tags": ["+N", "+V"], "default_source": "CW" } }"#,
    )
    .unwrap();

    let mut config = read_profile(&path).unwrap();
    assert_eq!(config.dictionary.default_source, "CW");
    extend_lexical_tags(&mut config, ["+V".to_string(), "+Ipc".to_string()]);

    assert_eq!(config.dictionary.lexical_tags, vec!["+N", "+V", "+Ipc"]);
}

#[test]
fn test_load_config_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(load_config(Some(&path)).is_err());
}
