use chrono::NaiveDate;
use codac_core::clock::FixedClock;
use codac_core::config::CodacConfig;
use codac_core::error::ApiError;
use codac_core::tooling::{AttendanceCommands, CliContext, Commands};
use std::fs;
use tempfile::TempDir;

fn context() -> CliContext {
    CliContext::with_config(CodacConfig::default())
        .with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()))
}

#[test]
fn tree_command_renders_outline() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("records.json");
    fs::write(
        &file,
        r#"[
            {"id": "d", "title": "Intro", "isFolder": false, "parentId": "f", "documentType": "curriculum"},
            {"id": "f", "title": "Week 1", "isFolder": true, "documentType": "curriculum"},
            {"id": "x", "title": "Off topic", "isFolder": false, "documentType": "community"}
        ]"#,
    )
    .unwrap();

    let output = context()
        .execute(&Commands::Tree {
            file: file.clone(),
            type_filter: Some("curriculum".to_string()),
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(output, "Week 1/\n  Intro\n");

    let json = context()
        .execute(&Commands::Tree {
            file,
            type_filter: None,
            format: "json".to_string(),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["type"], "FOLDER");
    assert_eq!(value[0]["children"][0]["id"], "d");
}

#[test]
fn tree_command_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.json");
    fs::write(&file, "{not json").unwrap();
    let result = context().execute(&Commands::Tree {
        file,
        type_filter: None,
        format: "text".to_string(),
    });
    assert!(matches!(result, Err(ApiError::Serialization(_))));
}

#[test]
fn normalize_uses_context_clock() {
    let output = context()
        .execute(&Commands::Attendance {
            command: AttendanceCommands::Normalize {
                date: None,
                today: None,
            },
        })
        .unwrap();
    assert_eq!(output, "2024-06-14");

    let output = context()
        .execute(&Commands::Attendance {
            command: AttendanceCommands::Normalize {
                date: Some("2024-06-01".to_string()),
                today: Some("2024-06-30".to_string()),
            },
        })
        .unwrap();
    assert_eq!(output, "2024-05-31");
}

#[test]
fn check_reports_flags_as_json() {
    let output = context()
        .execute(&Commands::Attendance {
            command: AttendanceCommands::Check {
                date: "2024-05-30".to_string(),
                today: Some("2024-06-30".to_string()),
                format: "json".to_string(),
            },
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["isWeekday"], true);
    assert_eq!(value["isWithinEditableWindow"], false);
    assert_eq!(value["isEditable"], false);
    assert_eq!(value["today"], "2024-06-30");
}

#[test]
fn check_rejects_bad_today() {
    let result = context().execute(&Commands::Attendance {
        command: AttendanceCommands::Check {
            date: "2024-05-30".to_string(),
            today: Some("someday".to_string()),
            format: "text".to_string(),
        },
    });
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn configured_window_applies_to_check() {
    let mut config = CodacConfig::default();
    config.attendance.editable_window_days = 5;
    let ctx = CliContext::with_config(config);
    let output = ctx
        .execute(&Commands::Attendance {
            command: AttendanceCommands::Check {
                date: "2024-06-24".to_string(),
                today: Some("2024-06-30".to_string()),
                format: "json".to_string(),
            },
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["isWithinEditableWindow"], false);
}

#[test]
fn calendar_lists_selectable_days() {
    let output = context()
        .execute(&Commands::Attendance {
            command: AttendanceCommands::Calendar {
                year: 2024,
                month: 6,
                today: None,
                format: "json".to_string(),
            },
        })
        .unwrap();
    let days: Vec<String> = serde_json::from_str(&output).unwrap();
    // June 3-7 and 10-14
    assert_eq!(days.len(), 10);
    assert_eq!(days.last().map(String::as_str), Some("2024-06-14"));
}
