//! Integration tests for reading damaged data files and writing output
//! atomically.

use neoscan_io::{
    read_csv_resilient, read_json_document, read_to_string, write_atomic, write_jsonl_atomic_iter,
    Error, Warning,
};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Deserialize, Serialize, PartialEq)]
struct Neo {
    pdes: String,
    diameter: Option<f64>,
}

#[tokio::test]
async fn csv_file_with_damaged_rows() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("neos.csv");
    tokio::fs::write(
        &path,
        "pdes,diameter,extra\n433,16.84,x\n719\n887,,y\n1036,big,z\n",
    )
    .await
    .unwrap();

    let content = read_to_string(&path).await.unwrap();
    let (rows, warnings) = read_csv_resilient::<Neo>(&content, &["pdes"]).unwrap();

    let decoded: Vec<(usize, &str, Option<f64>)> = rows
        .iter()
        .map(|(line, neo)| (*line, neo.pdes.as_str(), neo.diameter))
        .collect();
    assert_eq!(decoded, vec![(2, "433", Some(16.84)), (4, "887", None)]);

    let lines: Vec<usize> = warnings.warnings().iter().map(Warning::line_number).collect();
    assert_eq!(lines, vec![3, 5]);
}

#[rstest]
#[case::header_only("pdes,diameter\n", 0)]
#[case::no_trailing_newline("pdes,diameter\n433,16.84", 1)]
fn csv_edge_cases(#[case] content: &str, #[case] expected: usize) {
    let (rows, warnings) = read_csv_resilient::<Neo>(content, &["pdes"]).unwrap();
    assert_eq!(rows.len(), expected);
    assert!(warnings.is_empty());
}

#[test]
fn csv_without_header_is_invalid() {
    assert!(matches!(
        read_csv_resilient::<Neo>("", &["pdes"]),
        Err(Error::InvalidFormat(_))
    ));
}

#[tokio::test]
async fn json_document_errors() {
    let temp = TempDir::new().unwrap();

    let missing = read_json_document::<serde_json::Value, _>(temp.path().join("nope.json")).await;
    assert!(matches!(missing, Err(Error::Io(_))));

    let bad = temp.path().join("bad.json");
    tokio::fs::write(&bad, "{\"fields\": [").await.unwrap();
    let result = read_json_document::<serde_json::Value, _>(&bad).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.csv");
    tokio::fs::write(&path, "old contents").await.unwrap();

    write_atomic(&path, b"new contents").await.unwrap();

    assert_eq!(read_to_string(&path).await.unwrap(), "new contents");
    assert!(!temp.path().join("out.csv.tmp").exists());
}

#[tokio::test]
async fn atomic_write_into_missing_directory_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing").join("out.csv");

    assert!(write_atomic(&path, b"data").await.is_err());
    assert!(!path.exists());
}

#[tokio::test]
async fn jsonl_write_pulls_lazily_from_iterator() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.jsonl");
    let source = (1..).map(|i| Neo {
        pdes: i.to_string(),
        diameter: None,
    });

    let written = write_jsonl_atomic_iter(&path, source.take(3)).await.unwrap();

    assert_eq!(written, 3);
    let content = read_to_string(&path).await.unwrap();
    let decoded: Vec<Neo> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(decoded[2].pdes, "3");
    assert_eq!(decoded.len(), 3);
}
