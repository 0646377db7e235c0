//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sigil_cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("sigil").unwrap();
    cmd
}

#[test]
fn generate_letters_prints_balanced_svg() {
    let output = sigil_cmd()
        .args(["generate", "--letters", "A,B,C"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(output).unwrap();
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<path ").count(), 3);
    assert!(svg.contains(r#"stroke-width="2.5""#));
}

#[test]
fn generate_json_includes_letters_and_fingerprint() {
    let output = sigil_cmd()
        .args(["generate", "--letters", "A,1,@", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["letters"], serde_json::json!(["A"]));
    for variant in ["dense", "balanced", "minimal"] {
        let svg = json["svgs"][variant].as_str().unwrap();
        assert_eq!(svg.matches("<path ").count(), 1);
    }
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);
}

#[test]
fn generate_without_valid_letters_exits_2() {
    sigil_cmd()
        .args(["generate", "--letters", "1,@"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("please enter at least one valid letter"));
}

#[test]
fn generate_lowercase_needs_fold_case() {
    sigil_cmd()
        .args(["generate", "--letters", "a,b"])
        .assert()
        .code(2);

    sigil_cmd()
        .args(["generate", "--letters", "a,b", "--fold-case", "--variant", "dense"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"data-letter="A""#))
        .stdout(predicate::str::contains(r#"stroke-width="4""#));
}

#[test]
fn generate_reads_intention_from_stdin() {
    let output = sigil_cmd()
        .arg("generate")
        .write_stdin("I am grateful\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(output).unwrap();
    // MGRTFL
    assert_eq!(svg.matches("<path ").count(), 6);
}

#[test]
fn generate_writes_all_variants_to_out_dir() {
    let dir = TempDir::new().unwrap();
    sigil_cmd()
        .args(["generate", "--intention", "Protect my home", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sigil_dense.svg"));

    for variant in ["dense", "balanced", "minimal"] {
        let svg = std::fs::read_to_string(dir.path().join(format!("sigil_{variant}.svg"))).unwrap();
        assert_eq!(svg.matches("<path ").count(), 7);
    }
}

#[test]
fn generate_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("sigil.toml");
    std::fs::write(&config, "[render]\ncanvas_size = 64\nstroke_color = \"#FFFFFF\"\n").unwrap();
    sigil_cmd()
        .args(["generate", "--letters", "X", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"width="64""#))
        .stdout(predicate::str::contains(r##"stroke="#FFFFFF""##));
}

#[test]
fn generate_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("sigil.toml");
    std::fs::write(&config, "[render.variants.minimal]\nstroke_width = 9.0\n").unwrap();
    sigil_cmd()
        .args(["generate", "--letters", "X", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dense > balanced > minimal"));
}

#[test]
fn generate_rejects_unknown_variant() {
    sigil_cmd()
        .args(["generate", "--letters", "X", "--variant", "bold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown variant"));
}

#[test]
fn reduce_prints_letters() {
    sigil_cmd()
        .args(["reduce", "Protect my home"])
        .assert()
        .success()
        .stdout("PRTCMYH\n");
}

#[test]
fn reduce_reads_stdin() {
    sigil_cmd()
        .arg("reduce")
        .write_stdin("find peace\n")
        .assert()
        .success()
        .stdout("FNDPC\n");
}
