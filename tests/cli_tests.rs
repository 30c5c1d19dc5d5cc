use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{Fixture, orkpi};

#[test]
fn test_report_prints_kpi_chart_and_detail() {
    let fx = Fixture::new();
    fx.cmd("report")
        .assert()
        .success()
        .stdout(contains("Total OR non planifiés"))
        .stdout(contains("75.00 %"))
        .stdout(contains("Equipe Sud"))
        .stdout(contains("OR5"))
        .stdout(contains("OR4").not());
}

#[test]
fn test_report_without_inputs_asks_for_files() {
    let fx = Fixture::new();
    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .arg("report")
        .arg("--extraction")
        .arg(&fx.extraction)
        .assert()
        .success()
        .stdout(contains("Provide the processed extraction and the timesheet"))
        .stdout(contains("--timesheet"));
}

#[test]
fn test_report_json() {
    let fx = Fixture::new();
    let output = fx.cmd("report").arg("--json").output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["kpi"]["total"], 4);
    assert_eq!(doc["kpi"]["planned"], 3);
    assert_eq!(doc["detail"][0]["OR"], "OR1");
    assert_eq!(doc["options"]["tie_break"], "most_hours");
}

#[test]
fn test_report_rule_overrides() {
    let fx = Fixture::new();
    fx.cmd("report")
        .args(["--planned-match", "contains"])
        .assert()
        .success()
        .stdout(contains("100.00 %"));

    fx.cmd("report")
        .arg("--all-locations")
        .assert()
        .success()
        .stdout(contains("60.00 %"))
        .stdout(contains("OR4"));
}

#[test]
fn test_report_selection_and_filter_order() {
    let fx = Fixture::new();
    fx.cmd("report")
        .args(["--position", "ATELIER"])
        .assert()
        .success()
        .stdout(contains("50.00 %"));

    fx.cmd("report")
        .args(["--manufacturer", "carrier", "--filter-order", "after-kpi"])
        .assert()
        .success()
        .stdout(contains("75.00 %"))
        .stdout(contains("OR2").not());
}

#[test]
fn test_report_limit() {
    let fx = Fixture::new();
    fx.cmd("report")
        .args(["--limit", "2"])
        .assert()
        .success()
        .stdout(contains("2 more rows"));
}

#[test]
fn test_reject_duplicated_extraction() {
    let fx = Fixture::new();
    common::write(
        fx.dir.path(),
        "extraction.csv",
        "OR;Planifié ?;Localisation;Position;Nom client;Type intervention\n\
         A;Planifié;MO EXTERIEUR;ATELIER;X;Y\n\
         A;Planifié;MO EXTERIEUR;ATELIER;X;Y\n",
    );

    fx.cmd("report")
        .assert()
        .success()
        .stdout(contains("repeated an OR"));

    fx.cmd("report")
        .args(["--master-duplicates", "reject"])
        .assert()
        .failure()
        .stderr(contains("Duplicate work-order keys"));
}

#[test]
fn test_categories_lists_filter_options() {
    let fx = Fixture::new();
    fx.cmd("categories")
        .args(["--position", "ROUTE"])
        .assert()
        .success()
        .stdout(contains("ATELIER"))
        .stdout(contains("ROUTE"))
        .stdout(contains("CARRIER"))
        .stdout(contains("(none)"));
}

#[test]
fn test_missing_column_fails() {
    let fx = Fixture::new();
    common::write(fx.dir.path(), "extraction.csv", "OR;Planifié ?\nOR1;Planifié\n");
    fx.cmd("report")
        .assert()
        .failure()
        .stderr(contains("Column 'Localisation' not found in the extraction table"));
}

#[test]
fn test_unsupported_input_fails() {
    let fx = Fixture::new();
    let odd = common::write(fx.dir.path(), "extraction.docx", "x");
    orkpi()
        .arg("--config")
        .arg(&fx.config)
        .arg("report")
        .arg("-x")
        .arg(&odd)
        .arg("-t")
        .arg(&fx.timesheet)
        .assert()
        .failure()
        .stderr(contains("Unsupported input file type"));
}

#[test]
fn test_verbose_logs_pipeline_on_stderr() {
    let fx = Fixture::new();
    let mut cmd = orkpi();
    cmd.env_remove("RUST_LOG")
        .arg("-vv")
        .arg("--config")
        .arg(&fx.config)
        .arg("report")
        .arg("-x")
        .arg(&fx.extraction)
        .arg("-t")
        .arg(&fx.timesheet);

    cmd.assert()
        .success()
        .stderr(contains("kpi computed"))
        .stderr(contains("timesheet reduced"))
        .stdout(contains("kpi computed").not());
}

#[test]
fn test_manufacturer_with_comma_is_selectable() {
    let fx = Fixture::new();
    common::write(
        fx.dir.path(),
        "equipements.csv",
        "N° OR (Segment);Constructeur de l'équipement\nOR1;Carrier\nOR2;Trane, Inc\n",
    );

    fx.cmd("categories")
        .assert()
        .success()
        .stdout(contains("TRANE, INC"));

    let output = fx
        .cmd("report")
        .args(["--manufacturer", "Trane, Inc", "--manufacturer", "carrier", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["kpi"]["total"], 2);
    assert_eq!(doc["selected_manufacturers"][1], "TRANE, INC");
}
