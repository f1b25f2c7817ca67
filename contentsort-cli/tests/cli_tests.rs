use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn contentsort_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("contentsort"))
}

const SAMPLE: &str = "\
// generated data, do not edit by hand
const allData = [
  [`5 hours ago`, `vor 5 Stunden`],
  [`Zebra`, `Z`],
  [`1 day ago`, `vor 1 Tag`],
  [`Apple`, `A`],
]

// trailer comment
";

#[test]
fn test_sort_with_explicit_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("content.js");
    let output_file = temp_dir.path().join("content_sorted.js");
    fs::write(&input_file, SAMPLE).unwrap();

    let output = contentsort_cmd()
        .arg(input_file.to_str().unwrap())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("content_sorted.js"));
    assert!(stdout.contains("4 translation pairs"));

    let written = fs::read_to_string(&output_file).unwrap();
    let positions: Vec<usize> = [
        "[`5 hours ago`, `vor 5 Stunden`],",
        "[`1 day ago`, `vor 1 Tag`],",
        "[`Apple`, `A`],",
        "[`Zebra`, `Z`],",
    ]
    .iter()
    .map(|entry| written.find(entry).expect("entry present"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(written.ends_with("// trailer comment\n"));
    // The preamble is replaced by the fixed header line.
    assert!(written.starts_with("const allData = [\n"));
    assert!(!written.contains("generated data"));
}

#[test]
fn test_default_input_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("content.js"), SAMPLE).unwrap();

    let output = contentsort_cmd()
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(temp_dir.path().join("content_sorted.js").exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("missing.js");

    let output = contentsort_cmd()
        .arg(input_file.to_str().unwrap())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("file not found"));
    assert!(!temp_dir.path().join("content_sorted.js").exists());
}

#[test]
fn test_input_without_pairs_warns_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("content.js");
    fs::write(&input_file, "console.log('no array here');\n").unwrap();

    let output = contentsort_cmd()
        .arg(input_file.to_str().unwrap())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no translation pairs found"));
    assert!(!temp_dir.path().join("content_sorted.js").exists());
}

#[test]
fn test_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("content.js");
    fs::write(&input_file, SAMPLE).unwrap();

    let output = contentsort_cmd()
        .args([input_file.to_str().unwrap(), "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let body: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["pairs"], 4);
    assert!(
        body["output"]
            .as_str()
            .unwrap()
            .ends_with("content_sorted.js")
    );
}
