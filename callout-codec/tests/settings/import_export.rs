//! Import merges by name; export is what import reads

use callout_codec::{CodecError, CustomCalloutDefinition, Settings};

fn with_project() -> Settings {
    let mut settings = Settings::default();
    settings
        .add_callout(CustomCalloutDefinition::new("project", "rocket", "#3498db"))
        .unwrap();
    settings
}

#[test]
fn test_existing_name_is_updated_in_place() {
    let mut settings = with_project();
    settings
        .add_callout(CustomCalloutDefinition::new("idea", "lightbulb", "#f1c40f"))
        .unwrap();

    let summary = settings
        .import_callouts(r##"[{"name":"project","icon":"folder","color":"#ff0000"}]"##)
        .unwrap();

    assert_eq!((summary.added, summary.updated), (0, 1));
    assert_eq!(summary.message(), "Import complete: 0 added, 1 updated.");
    assert_eq!(settings.custom_callouts.len(), 2);
    assert_eq!(
        settings.custom_callouts[0],
        CustomCalloutDefinition::new("project", "folder", "#ff0000")
    );
}

#[test]
fn test_mixed_import() {
    let mut settings = with_project();
    let summary = settings
        .import_callouts(
            r##"[
                {"name":"project","icon":"rocket","color":"#000000"},
                {"name":"meeting","icon":"users","color":"#8e44ad"},
                {"name":"recipe","icon":"chef-hat","color":"#e67e22"}
            ]"##,
        )
        .unwrap();

    assert_eq!((summary.added, summary.updated), (2, 1));
    let names: Vec<&str> = settings
        .custom_callouts
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["project", "meeting", "recipe"]);
}

#[test]
fn test_export_then_import_into_fresh_settings() {
    let mut source = with_project();
    source
        .add_callout(CustomCalloutDefinition::new("Big Idea", "lightbulb", "#f1c40f"))
        .unwrap();
    let exported = source.export_callouts().unwrap();
    assert!(exported.contains("\n  {"));

    let mut target = Settings::default();
    let summary = target.import_callouts(&exported).unwrap();

    assert_eq!((summary.added, summary.updated), (2, 0));
    assert_eq!(target.custom_callouts, source.custom_callouts);
}

#[test]
fn test_bad_input_leaves_settings_untouched() {
    let mut settings = with_project();
    let before = settings.clone();

    let not_json = settings.import_callouts("this is not json");
    assert!(matches!(not_json, Err(CodecError::Json(_))));

    let not_array = settings.import_callouts(r#"{"name":"x"}"#);
    assert!(matches!(not_array, Err(CodecError::InvalidImport(_))));

    // The first entry is fine; the second poisons the whole file
    let partial = settings.import_callouts(
        r##"[{"name":"new","icon":"star","color":"#111111"},{"name":"broken","icon":""}]"##,
    );
    assert!(matches!(partial, Err(CodecError::InvalidImport(_))));

    assert_eq!(settings, before);
}

#[test]
fn test_empty_array_changes_nothing() {
    let mut settings = with_project();
    let summary = settings.import_callouts("[]").unwrap();
    assert_eq!(summary.message(), "Import complete: 0 added, 0 updated.");
    assert_eq!(settings.custom_callouts.len(), 1);
}
