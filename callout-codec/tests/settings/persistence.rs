//! Settings on disk, including files written by hand

use callout_codec::{
    CalloutStyle, ColumnColorDefinition, CustomCalloutDefinition, Settings, SettingsFile,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_full_settings_survive_a_save() {
    let dir = tempdir().unwrap();
    let file = SettingsFile::new(dir.path().join("callouts.json"));

    let mut settings = Settings::default();
    settings
        .add_callout(CustomCalloutDefinition::new("project", "rocket", "#3498db"))
        .unwrap();
    settings
        .add_column_color(ColumnColorDefinition::new("mint", "#98ff98"))
        .unwrap();
    settings.set_style(CalloutStyle::Default);
    file.save(&settings).unwrap();

    let loaded = file.load().unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.custom_column_colors[0].name, "col-mint");
}

#[test]
fn test_saved_keys_are_camel_case() {
    let dir = tempdir().unwrap();
    let file = SettingsFile::new(dir.path().join("callouts.json"));
    file.save(&Settings::default()).unwrap();

    let raw = fs::read_to_string(file.path()).unwrap();
    assert!(raw.contains("\"customCallouts\""));
    assert!(raw.contains("\"calloutStyle\": \"clean-inbox\""));
    assert!(raw.contains("\"customColumnColors\""));
}

#[test]
fn test_partial_file_is_merged_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("callouts.json");
    fs::write(&path, r#"{"calloutStyle":"borderless"}"#).unwrap();

    let loaded = SettingsFile::new(&path).load().unwrap();
    assert_eq!(loaded.callout_style, CalloutStyle::Borderless);
    assert!(loaded.custom_callouts.is_empty());
    assert!(loaded.custom_column_colors.is_empty());
}
