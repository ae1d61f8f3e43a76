use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{hyd, init_db, setup_test_db, stdout_of};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    hyd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_accumulates_and_persists() {
    let db_path = setup_test_db("add_accumulates");
    init_db(&db_path);

    hyd().args(["--db", &db_path, "add"]).assert().success();
    hyd()
        .args(["--db", &db_path, "add"])
        .assert()
        .success()
        .stdout(contains("0.5 liters"));

    hyd()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("0.5 liters").and(contains("25% of your goal")));
}

#[test]
fn test_sub_never_goes_negative() {
    let db_path = setup_test_db("sub_clamps");
    init_db(&db_path);

    hyd()
        .args(["--db", &db_path, "sub"])
        .assert()
        .success()
        .stdout(contains("0 liters"))
        .stdout(contains("0% of your goal"));
}

#[test]
fn test_unit_change_resets_total() {
    let db_path = setup_test_db("unit_change");
    init_db(&db_path);

    hyd().args(["--db", &db_path, "add"]).assert().success();

    hyd()
        .args([
            "--db",
            &db_path,
            "settings",
            "--unit",
            "ml",
            "--goal",
            "3000",
            "--increment",
            "300",
        ])
        .assert()
        .success()
        .stdout(contains("Settings saved"))
        .stdout(contains("total was reset"));

    hyd()
        .args(["--db", &db_path, "add"])
        .assert()
        .success()
        .stdout(contains("300 ml").and(contains("10% of your goal")));
}

#[test]
fn test_same_unit_save_keeps_total() {
    let db_path = setup_test_db("same_unit");
    init_db(&db_path);

    hyd().args(["--db", &db_path, "add"]).assert().success();

    hyd()
        .args(["--db", &db_path, "settings", "--goal", "1"])
        .assert()
        .success()
        .stdout(contains("0.25 liters"))
        .stdout(contains("25% of your goal"))
        .stdout(contains("total was reset").not());
}

#[test]
fn test_settings_view_shows_current_values() {
    let db_path = setup_test_db("settings_view");
    init_db(&db_path);

    hyd()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("Goal:").and(contains("2 liters")))
        .stdout(contains("0.25 liters"));
}

#[test]
fn test_non_numeric_input_is_clamped() {
    let db_path = setup_test_db("non_numeric");
    init_db(&db_path);

    hyd()
        .args([
            "--db",
            &db_path,
            "settings",
            "--unit",
            "ml",
            "--goal",
            "lots",
            "--increment",
            "none",
        ])
        .assert()
        .success();

    // increment clamped to 1 ml, goal to 0
    hyd()
        .args(["--db", &db_path, "add"])
        .assert()
        .success()
        .stdout(contains("1 ml").and(contains("0% of your goal")));
}

#[test]
fn test_invalid_unit_is_rejected() {
    let db_path = setup_test_db("invalid_unit");
    init_db(&db_path);

    hyd()
        .args(["--db", &db_path, "settings", "--unit", "gallon"])
        .assert()
        .failure()
        .stderr(contains("Invalid unit"));
}

#[test]
fn test_stats_json_contract() {
    let db_path = setup_test_db("stats_json");
    init_db(&db_path);
    hyd().args(["--db", &db_path, "add"]).assert().success();

    let out = stdout_of(&["--db", &db_path, "stats", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&out).expect("json output");

    assert_eq!(v["labels"].as_array().unwrap().len(), 7);
    assert_eq!(v["values"].as_array().unwrap().len(), 7);
    assert_eq!(v["values"][6], 0.25);
    assert_eq!(v["datasetName"], "liters");
    assert_eq!(v["yAxis"]["min"], 0.0);
    assert_eq!(v["yAxis"]["max"], 2.0);
    assert_eq!(v["yAxis"]["step"], 0.5);
}

#[test]
fn test_stats_text_chart() {
    let db_path = setup_test_db("stats_text");
    init_db(&db_path);

    hyd()
        .args(["--db", &db_path, "stats", "--days", "3"])
        .assert()
        .success()
        .stdout(contains("Last 3 days (liters)"));
}

#[test]
fn test_history_empty_message() {
    let db_path = setup_test_db("history_empty");
    init_db(&db_path);

    hyd()
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains("No archived days yet"));
}

#[test]
fn test_log_records_settings_changes() {
    let db_path = setup_test_db("log_settings");
    init_db(&db_path);

    hyd()
        .args(["--db", &db_path, "settings", "--goal", "2.5"])
        .assert()
        .success();

    hyd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("settings (liters)"))
        .stdout(contains("goal 2500 ml"));
}
