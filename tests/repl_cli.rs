use assert_cmd::prelude::*;
use assert_fs::{prelude::*, NamedTempFile};
use predicates::prelude::*;
use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn grades_file(content: &str) -> Result<NamedTempFile> {
    let file = assert_fs::NamedTempFile::new("grades.txt")?;
    file.write_str(content)?;
    Ok(file)
}

fn test_cmd(temp_file: &NamedTempFile) -> Result<std::process::Child> {
    let cmd = Command::cargo_bin("gradebook")?
        .arg("-f")
        .arg(temp_file.path())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    Ok(cmd)
}

fn session(temp_file: &NamedTempFile, input: &str) -> Result<Output> {
    let mut cmd = test_cmd(temp_file)?;
    // The process may exit before reading everything, e.g. on a fatal load error
    let _ = cmd.stdin.as_mut().unwrap().write_all(input.as_bytes());
    Ok(cmd.wait_with_output()?)
}

#[test]
fn displays_grade_book() -> Result<()> {
    let file = grades_file("768654,89.5\n100000,50.0\n")?;

    session(&file, "1\n5\n")?
        .assert()
        .success()
        .stdout(predicate::str::contains("Student ID | Grade"))
        .stdout(predicate::str::contains("768654       89.5\n100000       50.0"));

    file.close()?;
    Ok(())
}

#[test]
fn highest_grade_last_tie_wins() -> Result<()> {
    let file = grades_file("100000,50.0\n100001,99.9\n100002,99.9")?;

    session(&file, "2\n5\n")?
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The student ID with the highest grade is 100002 with a grade of 99.9",
        ));

    file.close()?;
    Ok(())
}

#[test]
fn persists_new_student() -> Result<()> {
    let file = grades_file("")?;
    session(&file, "3\n123456\n88.0\n5\n")?.assert().success();

    session(&file, "1\n5\n")?
        .assert()
        .success()
        .stdout(predicate::str::contains("123456       88.0"));

    file.close()?;
    Ok(())
}

#[test]
fn duplicate_student_rejected() -> Result<()> {
    let file = grades_file("123456,70.0")?;

    session(&file, "3\n123456\n")?
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The student ID 123456 already exists in the grade book. Please try again.",
        ));
    file.assert("123456,70.0");

    file.close()?;
    Ok(())
}

#[test]
fn updates_only_the_chosen_student() -> Result<()> {
    let file = grades_file("100000,88.0\n123456,88.0\n100001,88.0\n")?;

    session(&file, "4\n123456\n92.5\n5\n")?.assert().success();
    file.assert("100000,88.0\n123456,92.5\n100001,88.0\n");

    file.close()?;
    Ok(())
}

#[test]
fn malformed_file_is_fatal() -> Result<()> {
    let file = grades_file("100000,50.0\n123,45.0\n")?;

    session(&file, "3\n654321\n70\n5\n")?
        .assert()
        .failure()
        .stdout(predicate::str::contains("is not in the expected format"))
        .stdout(predicate::str::contains("Example: 768654,89.5"))
        .stdout(predicate::str::contains("[1]").not());
    file.assert("100000,50.0\n123,45.0\n");

    file.close()?;
    Ok(())
}

#[test]
fn prompts_for_path_when_file_missing() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let file = grades_file("100000,50.0")?;
    let missing = dir.child("missing.txt");

    let mut cmd = Command::cargo_bin("gradebook")?
        .arg("--file")
        .arg(missing.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    cmd.stdin
        .as_mut()
        .unwrap()
        .write_all(format!("{}\n1\n5\n", file.path().display()).as_bytes())?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be opened. Please try again."))
        .stdout(predicate::str::contains("100000       50.0"));

    file.close()?;
    dir.close()?;
    Ok(())
}

#[test]
fn asks_for_path_without_flag() -> Result<()> {
    let file = grades_file("100000,50.0")?;

    let mut cmd = Command::cargo_bin("gradebook")?
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    cmd.stdin
        .as_mut()
        .unwrap()
        .write_all(format!("{}\n5\n", file.path().display()).as_bytes())?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter the path to the file grades.txt: ",
        ));

    file.close()?;
    Ok(())
}
