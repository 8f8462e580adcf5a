use super::*;
use crate::display::DisplayProviderExt;
use crate::profiles::OperationReport;
use std::path::Path;

#[test]
fn test_mock_records_calls_in_order() {
    let display = MockDisplayProvider::new();

    display.status().checking("Searching");
    let spinner = display.progress().spinner("Downloading");
    spinner.finish_clear();
    display.table().list(&["Default".to_string()]);

    assert_eq!(
        display.get_calls(),
        vec![
            DisplayCall::StatusChecking {
                task: "Searching".to_string()
            },
            DisplayCall::ProgressSpinner {
                message: "Downloading".to_string()
            },
            DisplayCall::ProgressFinishClear,
            DisplayCall::List {
                items: vec!["Default".to_string()]
            },
        ]
    );
    assert_eq!(display.count_calls("spinner"), 1);
}

#[test]
fn test_clones_share_the_call_log() {
    let display = MockDisplayProvider::new();
    let clone = display.clone();

    clone.status().info("shared");
    assert!(display.has_call(&DisplayCall::StatusInfo {
        message: "shared".to_string()
    }));

    display.clear_calls();
    assert!(clone.get_calls().is_empty());
}

#[test]
fn test_display_report_clean() {
    let display = MockDisplayProvider::new();
    let report = OperationReport {
        succeeded: 1,
        warnings: Vec::new(),
    };

    display.display_report("Import", &report);

    assert_eq!(
        display.get_calls(),
        vec![DisplayCall::StatusSuccess {
            item: "Import".to_string(),
            details: "1 item".to_string()
        }]
    );
}

#[test]
fn test_display_report_lists_warnings() {
    let display = MockDisplayProvider::new();
    let mut report = OperationReport::default();
    report.record_success();
    report.record_failure(Path::new("locked.jar"), "permission denied");

    display.display_report("Apply", &report);

    assert_eq!(display.count_calls("warning"), 1);
    assert!(display.output_contains("1 warning (1 item succeeded)"));
    assert!(display.output_contains("locked.jar: permission denied"));
}
