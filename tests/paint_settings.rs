use retropaint::paint::model::{Color, Tool};
use retropaint::paint::settings::PaintSettings;
use retropaint::paint::settings_store;
use serial_test::serial;

// The exe-relative store writes one file next to the test binary, shared by
// every test in this process.

#[test]
#[serial]
fn exe_relative_store_roundtrip() {
    let settings = PaintSettings {
        last_tool: Tool::Eraser,
        last_color: Color::rgba(30, 60, 90, 255),
        last_width: 11,
        ..PaintSettings::default()
    };

    let path = settings_store::save(&settings).expect("save settings");
    assert!(path.ends_with(settings_store::PAINT_SETTINGS_FILE_NAME));

    let loaded = settings_store::load().expect("load settings");
    assert_eq!(loaded, settings);

    std::fs::remove_file(path).expect("clean up settings file");
}

#[test]
#[serial]
fn load_without_a_stored_file_yields_defaults() {
    let path = settings_store::resolve_settings_path().expect("resolve path");
    if path.exists() {
        std::fs::remove_file(&path).expect("reset store");
    }

    let loaded = settings_store::load().expect("load settings");
    assert_eq!(loaded, PaintSettings::default());
}
