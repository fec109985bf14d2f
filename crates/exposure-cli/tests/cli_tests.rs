//! End-to-end tests for the `exposure` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const DATASET1: &str = "\
legal_entity,counter_party,rating,status,value
LE1,CP1,5,ARAP,100
LE1,CP1,3,ACCR,50
LE2,CP2,4,ARAP,75
";

const DATASET2: &str = "\
counter_party,tier
CP1,T1
CP2,T2
";

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let d1 = dir.join("dataset1.csv");
    let d2 = dir.join("dataset2.csv");
    fs::write(&d1, DATASET1).unwrap();
    fs::write(&d2, DATASET2).unwrap();
    (d1, d2)
}

fn run_engine(engine: &str, dir: &Path, output: &Path) {
    let (d1, d2) = write_inputs(dir);
    Command::cargo_bin("exposure")
        .unwrap()
        .args([
            engine,
            "--dataset1",
            d1.to_str().unwrap(),
            "--dataset2",
            d2.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--truncate",
        ])
        .assert()
        .success();
}

#[test]
fn run_engine_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.csv");
    run_engine("run", dir.path(), &output);

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "legal_entity,counter_party,tier,max(rating by counterparty),sum(value where status=ARAP),sum(value where status=ACCR)"
    );
    // Two distinct combinations under each of the 7 group keys.
    assert_eq!(lines.len(), 1 + 14);
    // Section 1 is [tier]: back-filled counts for the other two columns.
    assert_eq!(lines[1], "2,2,T1,5,100,50");
    assert_eq!(lines[2], "1,1,T2,4,75,0");
}

#[test]
fn engines_agree() {
    let dir = tempfile::tempdir().unwrap();
    let out_run = dir.path().join("run.csv");
    let out_frame = dir.path().join("frame.csv");

    run_engine("run", dir.path(), &out_run);
    run_engine("frame", dir.path(), &out_frame);

    assert_eq!(
        fs::read_to_string(&out_run).unwrap(),
        fs::read_to_string(&out_frame).unwrap()
    );
}

#[test]
fn append_accumulates_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.csv");
    let (d1, d2) = write_inputs(dir.path());

    for _ in 0..2 {
        Command::cargo_bin("exposure")
            .unwrap()
            .args([
                "run",
                "--dataset1",
                d1.to_str().unwrap(),
                "--dataset2",
                d2.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();
    }

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents.lines().count(), 1 + 2 * 14);
}

#[test]
fn missing_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("exposure")
        .unwrap()
        .args([
            "run",
            "--dataset1",
            dir.path().join("absent.csv").to_str().unwrap(),
        ])
        .current_dir(dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
