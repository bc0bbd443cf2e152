use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Every binary with its executable path
fn all_tools() -> [(&'static str, &'static Path); 3] {
    [
        ("compute-statistics", assert_cmd::cargo::cargo_bin!("compute-statistics")),
        ("convert-numbers", assert_cmd::cargo::cargo_bin!("convert-numbers")),
        ("word-count", assert_cmd::cargo::cargo_bin!("word-count")),
    ]
}

/// Run a binary with `dir` as working directory and no colors
fn tool_cmd(bin: &Path, dir: &Path) -> Command {
    let mut cmd = Command::new(bin);
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("FILECALC_ROOT")
        .env_remove("FILECALC_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

// ============== usage ==============

#[test]
fn every_tool_rejects_missing_argument() {
    let temp = tempdir().unwrap();
    for (name, bin) in all_tools() {
        tool_cmd(bin, temp.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains(format!("Usage: {}", name)));
    }
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn every_tool_rejects_extra_arguments() {
    let temp = tempdir().unwrap();
    for (_, bin) in all_tools() {
        tool_cmd(bin, temp.path())
            .args(["one", "two"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage:"));
    }
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn escape_marker_counts_as_an_argument() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("ComputeStatisticsFiles/x.txt"), "1\n2\n");

    tool_cmd(assert_cmd::cargo::cargo_bin!("compute-statistics"), temp.path())
        .args(["--", "x"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: compute-statistics"))
        .stdout(predicate::str::contains("Descriptive Statistics").not());

    let dir = temp.path().join("ComputeStatisticsFiles");
    assert_eq!(fs::read_dir(dir).unwrap().count(), 1);
}

#[test]
fn hyphenated_name_is_used_as_input() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("ConvertNumbersFiles/-5.txt"), "5\n");

    tool_cmd(assert_cmd::cargo::cargo_bin!("convert-numbers"), temp.path())
        .arg("-5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Binary: 101 | Hexadecimal: 5"));

    assert!(temp
        .path()
        .join("ConvertNumbersFiles/Convertion-5Results.txt")
        .exists());
}

// ============== compute-statistics ==============

#[test]
fn statistics_prints_and_saves_results() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("ComputeStatisticsFiles/TC1.txt"),
        "1\n2\n3\n4\n",
    );

    tool_cmd(assert_cmd::cargo::cargo_bin!("compute-statistics"), temp.path())
        .arg("TC1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Descriptive Statistics"))
        .stdout(predicate::str::contains("Median: 2.5"))
        .stdout(predicate::str::contains("Elapsed Time: "));

    let saved = fs::read_to_string(
        temp.path()
            .join("ComputeStatisticsFiles/StatisticsTC1Results.txt"),
    )
    .unwrap();
    assert!(saved.starts_with(
        "Descriptive Statistics\nCount: 4\nMean: 2.5\nMedian: 2.5\nMode: 1.0\n"
    ));
    assert!(saved.contains("Variance: 1.25\n\nElapsed Time: "));
}

#[test]
fn statistics_skips_invalid_lines_with_warning() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("ComputeStatisticsFiles/mixed.txt"),
        "2\nabc\n4\n6\n",
    );

    tool_cmd(assert_cmd::cargo::cargo_bin!("compute-statistics"), temp.path())
        .arg("mixed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Invalid data"))
        .stdout(predicate::str::contains("abc"))
        .stdout(predicate::str::contains("Count: 3"))
        .stdout(predicate::str::contains("Mean: 4.0"));
}

#[test]
fn statistics_empty_input_writes_no_file() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("ComputeStatisticsFiles/empty.txt"), "");

    tool_cmd(assert_cmd::cargo::cargo_bin!("compute-statistics"), temp.path())
        .arg("empty")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cannot compute statistics"));

    assert!(!temp
        .path()
        .join("ComputeStatisticsFiles/StatisticsemptyResults.txt")
        .exists());
}

#[test]
fn statistics_missing_input_reports_not_found() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("ComputeStatisticsFiles")).unwrap();

    tool_cmd(assert_cmd::cargo::cargo_bin!("compute-statistics"), temp.path())
        .arg("ghost")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not found"));

    let dir = temp.path().join("ComputeStatisticsFiles");
    assert_eq!(fs::read_dir(dir).unwrap().count(), 0);
}

// ============== convert-numbers ==============

#[test]
fn conversion_prints_and_saves_results() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("ConvertNumbersFiles/TC1.txt"),
        "10\n255\n-3.9\n",
    );

    tool_cmd(assert_cmd::cargo::cargo_bin!("convert-numbers"), temp.path())
        .arg("TC1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Decimal: 10.0 | Binary: 1010 | Hexadecimal: A",
        ));

    let saved =
        fs::read_to_string(temp.path().join("ConvertNumbersFiles/ConvertionTC1Results.txt"))
            .unwrap();
    let lines: Vec<_> = saved.lines().collect();
    assert_eq!(lines[0], "Conversion Results");
    assert_eq!(lines[1], "Decimal: 10.0 | Binary: 1010 | Hexadecimal: A");
    assert_eq!(lines[2], "Decimal: 255.0 | Binary: 11111111 | Hexadecimal: FF");
    assert_eq!(lines[3], "Decimal: -3.9 | Binary: -11 | Hexadecimal: -3");
    assert_eq!(lines[4], "");
    assert!(lines[5].starts_with("Elapsed Time: "));
}

// ============== word-count ==============

#[test]
fn word_count_keeps_first_seen_order() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("CountWordsFiles/story.txt"),
        "The cat sat. The CAT sat!\n",
    );

    tool_cmd(assert_cmd::cargo::cargo_bin!("word-count"), temp.path())
        .arg("story")
        .assert()
        .success()
        .stdout(predicate::str::contains("Word\tCount of story"));

    let saved =
        fs::read_to_string(temp.path().join("CountWordsFiles/WordCountstoryResults.txt")).unwrap();
    assert!(saved.starts_with("Word\tCount of story\nthe\t2\ncat\t2\nsat\t2\n\nElapsed Time: "));
}

#[test]
fn root_and_json_format_from_environment() {
    let temp = tempdir().unwrap();
    let data_root = temp.path().join("data");
    write_file(&data_root.join("CountWordsFiles/notes.txt"), "b a b\n");

    let assert = tool_cmd(assert_cmd::cargo::cargo_bin!("word-count"), temp.path())
        .env("FILECALC_ROOT", &data_root)
        .env("FILECALC_FORMAT", "json")
        .arg("notes")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("json output");
    assert_eq!(value["tool"], "word-count");
    assert_eq!(value["result"]["b"], 2);
    assert_eq!(value["result"]["a"], 1);

    // the results file stays plain text
    let saved =
        fs::read_to_string(data_root.join("CountWordsFiles/WordCountnotesResults.txt")).unwrap();
    assert!(saved.starts_with("Word\tCount of notes\nb\t2\na\t1\n"));
}
