use assert_cmd::Command;
use predicates::prelude::*;

fn fixture() -> String {
    format!("{}/../fixtures/well_depth.csv", env!("CARGO_MANIFEST_DIR"))
}

fn bar_count(svg: &str) -> usize {
    svg.to_lowercase().matches("fill=\"#4682b4\"").count()
}

fn cli() -> Command {
    Command::cargo_bin("wot-cli").unwrap()
}

#[test]
fn stations_are_sorted_and_unique() {
    cli()
        .args(["stations", "-i", &fixture()])
        .assert()
        .success()
        .stdout("Alder Creek\nBirch Hollow\nCedar Grove\n");
}

#[test]
fn years_for_station() {
    cli()
        .args(["years", "-i", &fixture(), "-s", "Alder Creek"])
        .assert()
        .success()
        .stdout("2019\n2020\n2021\n");
}

#[test]
fn render_duplicate_year_draws_two_bars() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("alder.svg");
    cli()
        .args(["render", "-i", &fixture(), "-o"])
        .arg(&out)
        .args(["-s", "Alder Creek", "-y", "2020"])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert_eq!(bar_count(&svg), 2);
    assert_eq!(svg.matches("Average Water Depth Over Time by Site").count(), 1);
}

#[test]
fn render_defaults_to_first_station() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("default.svg");
    cli()
        .args(["render", "-i", &fixture(), "-o"])
        .arg(&out)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(">2019</text>"));
    assert_eq!(bar_count(&svg), 1);
}

#[test]
fn render_blank_depth_is_a_zero_height_bar() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("alder-2021.svg");
    cli()
        .args(["render", "-i", &fixture(), "-o"])
        .arg(&out)
        .args(["-s", "Alder Creek", "-y", "2021"])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(">2021</text>"));
    assert_eq!(bar_count(&svg), 1);
}

#[test]
fn missing_input_fails() {
    cli()
        .args(["stations", "-i", "/nonexistent/well_depth.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
