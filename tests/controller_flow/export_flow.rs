//! Export-Fluss: Dialog, Einstellungen, PNG-Datei.

use neon_sign_studio::export::{ExportBackground, ExportScaleMode, ExportSettings};
use neon_sign_studio::AppIntent;

use super::support::*;

#[test]
fn export_dialog_flow_writes_png() {
    let path = std::env::temp_dir().join(format!("neon_flow_{}_export.png", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();

    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![100.0, 100.0, 500.0, 500.0]);

    send(&mut controller, &mut state, AppIntent::ExportDialogRequested);
    assert!(state.ui.show_export_dialog);

    let settings = ExportSettings {
        width: 64,
        height: 64,
        scale_mode: ExportScaleMode::Fit,
        background: ExportBackground::Transparent,
        pixel_ratio: 1,
    };
    send(
        &mut controller,
        &mut state,
        AppIntent::ExportSettingsChanged { settings },
    );
    assert_eq!(state.ui.export_settings, settings);

    send(&mut controller, &mut state, AppIntent::ExportConfirmed);
    assert!(!state.ui.show_export_dialog);
    assert!(state.ui.export_file_dialog_requested);

    send(
        &mut controller,
        &mut state,
        AppIntent::ExportFilePathSelected {
            path: path_str.clone(),
        },
    );

    let (width, height) = image::image_dimensions(&path).unwrap();
    assert_eq!((width, height), (64, 64));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn cancel_closes_export_dialog() {
    let (mut controller, mut state) = new_app();
    send(&mut controller, &mut state, AppIntent::ExportDialogRequested);
    send(&mut controller, &mut state, AppIntent::ExportDialogCancelled);
    assert!(!state.ui.show_export_dialog);
    assert!(!state.ui.export_file_dialog_requested);
}
