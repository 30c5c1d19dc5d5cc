use orkpi::config::ColumnConfig;
use orkpi::core::filter::Selection;
use orkpi::core::pipeline::{ReportOptions, ReportRequest, build_report};
use orkpi::errors::AppError;
use orkpi::ingest::table::{Cell, RawTable};
use orkpi::ingest::{InputPaths, load_dataset};
use rust_xlsxwriter::Workbook;
use std::path::Path;

mod common;
use common::{EXTRACTION_CSV, Fixture, write};

#[test]
fn test_csv_delimiters_are_sniffed() {
    let semi = RawTable::from_csv_str("OR;Heures\n1;2\n", "t").unwrap();
    let comma = RawTable::from_csv_str("OR,Heures\n1,2\n", "t").unwrap();
    let tab = RawTable::from_csv_str("OR\tHeures\n1\t2\n", "t").unwrap();

    for table in [&semi, &comma, &tab] {
        assert_eq!(table.headers, vec!["OR", "Heures"]);
        assert_eq!(table.rows[0][1], Cell::Text("2".to_string()));
    }
}

#[test]
fn test_csv_bom_blank_rows_and_header_spaces() {
    let table =
        RawTable::from_csv_str("\u{feff} OR ;Position\u{00A0}\n1;A\n;\n2;B\n", "extraction").unwrap();
    assert_eq!(table.headers, vec!["OR", "Position"]);
    assert_eq!(table.len(), 2);
    assert!(table.column("Position").is_ok());
    assert!(matches!(
        table.column("Localisation"),
        Err(AppError::MissingColumn { .. })
    ));
}

#[test]
fn test_short_rows_read_as_empty() {
    let table = RawTable::from_csv_str("OR;Position;Client\n1;A\n", "t").unwrap();
    let row = &table.rows[0];
    assert_eq!(table.cell(row, 2), &Cell::Empty);
}

fn write_extraction_xlsx(path: &Path) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let headers = [
        "OR",
        "Planifié ?",
        "Localisation",
        "Position",
        "Nom client",
        "Type intervention",
    ];
    for (c, h) in headers.iter().enumerate() {
        ws.write(0, c as u16, *h).unwrap();
    }
    // numeric keys, as exported by the ERP
    ws.write(1, 0, 1001.0).unwrap();
    ws.write(1, 1, "Planifié").unwrap();
    ws.write(1, 2, "MO EXTERIEUR").unwrap();
    ws.write(1, 3, "ATELIER").unwrap();
    ws.write(2, 0, 1002.0).unwrap();
    ws.write(2, 1, "Non planifié").unwrap();
    ws.write(2, 2, "MO CVA").unwrap();
    ws.write(2, 3, "ROUTE").unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn test_xlsx_extraction_joins_csv_timesheet() {
    let fx = Fixture::new();
    let xlsx = fx.path("extraction.xlsx");
    write_extraction_xlsx(&xlsx);
    let timesheet = write(
        fx.dir.path(),
        "pointage_num.csv",
        "OR (Numéro);Salarié - Nom;Salarié - Équipe(Nom);Heures\n1001;Dupont;Equipe Nord;3\n",
    );

    let dataset = load_dataset(&InputPaths {
        extraction: Some(xlsx),
        timesheet: Some(timesheet),
        equipment: None,
    })
    .unwrap()
    .expect("both required inputs supplied");

    assert_eq!(dataset.extraction.rows[0][0], Cell::Number(1001.0));

    let report = build_report(&ReportRequest {
        dataset,
        columns: ColumnConfig::default(),
        options: ReportOptions::default(),
        selection: Selection::all(),
    })
    .unwrap();

    assert_eq!(report.kpi.total, 2);
    assert_eq!(report.kpi.rate, 50.0);
    assert_eq!(report.detail[0].key, "1001");
    assert_eq!(report.detail[0].team.as_deref(), Some("Equipe Nord"));
}

#[test]
fn test_missing_required_input_gives_none() {
    let fx = Fixture::new();
    let paths = InputPaths {
        extraction: Some(fx.extraction.clone()),
        timesheet: None,
        equipment: Some(fx.equipment.clone()),
    };
    assert!(load_dataset(&paths).unwrap().is_none());
    assert_eq!(paths.missing(), vec!["timesheet (--timesheet)"]);
}

#[test]
fn test_unsupported_extension() {
    let fx = Fixture::new();
    let pdf = write(fx.dir.path(), "extraction.pdf", EXTRACTION_CSV);
    assert!(matches!(
        RawTable::from_path(&pdf, "extraction"),
        Err(AppError::UnsupportedInput(_))
    ));
}
