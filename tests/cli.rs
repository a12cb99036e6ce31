use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("paperfig"));
}

#[test]
fn size_for_text_width() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["size", "--layout", "text"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("6.9739 4.3101"));
}

#[test]
fn size_with_fraction_and_dpi() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["size", "--width", "240", "--fraction", "0.5", "--dpi", "100"]);
    cmd.assert().success().stdout(
        predicate::str::contains("1.6604 1.0262")
            .and(predicate::str::contains("166 103")),
    );
}

#[test]
fn size_json_output() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["size", "--width", "240", "--ratio", "1", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["width_in"], v["height_in"]);
}

#[test]
fn width_and_layout_conflict() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["size", "--width", "240", "--layout", "text"]);
    cmd.assert().failure();
}

#[test]
fn style_rc_lines() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["style", "--font-scale", "2"]);
    cmd.assert().success().stdout(
        predicate::str::contains("axes.labelsize: 18\n")
            .and(predicate::str::contains("xtick.labelsize: 16\n"))
            .and(predicate::str::contains("xtick.direction: in\n"))
            .and(predicate::str::contains("axes.prop_cycle: cycler('color', ['4c72b0'")),
    );
}

#[test]
fn style_json() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["style", "--format", "json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["font.size"], 9.0);
    assert_eq!(v["ps.fonttype"], 42);
    assert_eq!(v["font.serif"], "Times New Roman");
    assert_eq!(v["axes.grid"], false);
    assert_eq!(v["axes.prop_cycle"][0], "#4c72b0");
    assert_eq!(v["axes.prop_cycle"].as_array().map(Vec::len), Some(10));
}

#[test]
fn palette_lists_and_looks_up() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.arg("palette");
    cmd.assert().success().stdout(
        predicate::str::contains("cb_red  #e41a1c")
            .and(predicate::str::contains("msh_cmap2")),
    );

    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["palette", "deep_blue"]);
    cmd.assert().success().stdout("#4c72b0\n");
}

#[test]
fn palette_samples_colormap() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["palette", "cmap", "--samples", "2"]);
    cmd.assert().success().stdout("#000000\n#ffffff\n");
}

#[test]
fn palette_unknown_name_fails() {
    let mut cmd = Command::cargo_bin("paperfig").unwrap();
    cmd.args(["palette", "chartreuse"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown palette entry"));
}
