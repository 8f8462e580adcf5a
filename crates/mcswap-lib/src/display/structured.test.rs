use super::*;

#[test]
fn test_format_table_aligns_columns() {
    let rows = vec![
        vec!["Sodium".to_string(), "AANobbMI".to_string()],
        vec!["Iris Shaders".to_string(), "YL57xq9U".to_string()],
    ];

    let lines = format_table(&["Title", "Project ID"], &rows);

    assert_eq!(
        lines,
        vec![
            "Title         Project ID",
            "------------  ----------",
            "Sodium        AANobbMI",
            "Iris Shaders  YL57xq9U",
        ]
    );
}

#[test]
fn test_format_table_with_no_rows_has_header_only() {
    let lines = format_table(&["Name"], &[]);
    assert_eq!(lines, vec!["Name", "----"]);
}

#[test]
fn test_format_table_handles_ragged_rows() {
    let rows = vec![vec!["a".to_string(), "b".to_string(), "extra".to_string()]];
    let lines = format_table(&["X", "Y"], &rows);
    assert_eq!(lines[2], "a  b  extra");
}
