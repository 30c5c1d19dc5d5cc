use orkpi::core::dedup::{reduce_assignments, reduce_equipment, reduce_master};
use orkpi::core::join::{check_grain, enrich, join_assignments};
use orkpi::core::kpi::{compute_kpi, round2};
use orkpi::core::normalize::{PlannedMatcher, canonical_category, clean_text, coerce_hours};
use orkpi::errors::AppError;
use orkpi::ingest::table::Cell;
use orkpi::models::{
    Assignment, EquipmentRecord, MasterDuplicates, PlannedMatch, ReportRow, TieBreak, TimeEntry,
    WorkOrder,
};

fn order(key: &str, status: &str) -> WorkOrder {
    let matcher = PlannedMatcher::new(PlannedMatch::Exact, "Planifié", "PLANIF");
    WorkOrder {
        key: key.to_string(),
        status: canonical_category(status),
        is_planned: matcher.is_planned(status),
        client: String::new(),
        intervention_type: String::new(),
        location: "MO EXTERIEUR".to_string(),
        position: "ATELIER".to_string(),
    }
}

fn entry(key: &str, employee: &str, team: &str, hours: f64) -> TimeEntry {
    TimeEntry {
        key: key.to_string(),
        employee: employee.to_string(),
        team: team.to_string(),
        hours,
    }
}

fn equipment(key: &str, manufacturer: &str) -> EquipmentRecord {
    EquipmentRecord {
        key: key.to_string(),
        manufacturer: manufacturer.to_string(),
    }
}

#[test]
fn test_clean_text_handles_nbsp() {
    assert_eq!(clean_text("  Planifié\u{00A0}"), "Planifié");
    assert_eq!(clean_text("\u{202F}OR 1 "), "OR 1");
    assert_eq!(canonical_category("planifié"), "PLANIFIÉ");
}

#[test]
fn test_planned_variants_exact() {
    let matcher = PlannedMatcher::new(PlannedMatch::Exact, "Planifié", "PLANIF");
    assert!(matcher.is_planned("Planifié"));
    assert!(matcher.is_planned("PLANIFIÉ "));
    assert!(matcher.is_planned("planifié\u{00A0}"));
    assert!(!matcher.is_planned("Non planifié"));
    assert!(!matcher.is_planned(""));
}

#[test]
fn test_planned_variants_contains() {
    let matcher = PlannedMatcher::new(PlannedMatch::Contains, "Planifié", "planif");
    assert!(matcher.is_planned("Planifié"));
    assert!(matcher.is_planned("Non planifié"));
    assert!(!matcher.is_planned("Urgent"));
}

#[test]
fn test_coerce_hours() {
    assert_eq!(coerce_hours(&Cell::Number(2.5)), 2.5);
    assert_eq!(coerce_hours(&Cell::Text(" 4 ".to_string())), 4.0);
    assert_eq!(coerce_hours(&Cell::Text("n/a".to_string())), 0.0);
    assert_eq!(coerce_hours(&Cell::Number(f64::NAN)), 0.0);
    assert_eq!(coerce_hours(&Cell::Empty), 0.0);
}

#[test]
fn test_numeric_key_as_text() {
    assert_eq!(Cell::Number(12345.0).as_text(), "12345");
    assert_eq!(Cell::Number(1.5).as_text(), "1.5");
}

#[test]
fn test_most_hours_sums_groups() {
    let entries = vec![
        entry("1", "X", "T1", 2.0),
        entry("1", "Y", "T2", 3.0),
        entry("1", "X", "T1", 0.5),
    ];
    let reduced = reduce_assignments(&entries, TieBreak::MostHours);
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].technician, "Y");
    assert_eq!(reduced[0].team, "T2");

    let reduced = reduce_assignments(&entries, TieBreak::FirstSeen);
    assert_eq!(reduced[0].technician, "X");
}

#[test]
fn test_most_hours_tie_goes_to_first_group() {
    let entries = vec![entry("1", "X", "T1", 2.0), entry("1", "Y", "T2", 2.0)];
    let reduced = reduce_assignments(&entries, TieBreak::MostHours);
    assert_eq!(reduced[0].technician, "X");
}

/// Reduced assignments written back as timesheet lines.
fn assignments_as_entries(assignments: &[Assignment]) -> Vec<TimeEntry> {
    assignments
        .iter()
        .map(|a| entry(&a.key, &a.technician, &a.team, a.hours))
        .collect()
}

#[test]
fn test_reduction_is_idempotent() {
    let entries = vec![
        entry("2", "A", "T1", 1.0),
        entry("1", "X", "T1", 2.0),
        entry("1", "Y", "T2", 3.0),
        entry("2", "B", "T2", 1.0),
    ];
    for policy in [TieBreak::MostHours, TieBreak::FirstSeen] {
        let once = reduce_assignments(&entries, policy);
        let twice = reduce_assignments(&assignments_as_entries(&once), policy);
        assert_eq!(once, twice);
        // first-appearance order of the keys
        let keys: Vec<&str> = once.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "1"]);
    }
}

#[test]
fn test_reduce_equipment_keeps_first() {
    let records = vec![
        equipment("1", "CARRIER"),
        equipment("1", "DAIKIN"),
        equipment("2", "DAIKIN"),
    ];
    let reduced = reduce_equipment(&records);
    assert_eq!(reduced, vec![equipment("1", "CARRIER"), equipment("2", "DAIKIN")]);
    assert_eq!(reduce_equipment(&reduced), reduced);
}

#[test]
fn test_reduce_master_policies() {
    let orders = vec![order("A", "Planifié"), order("A", "Non planifié"), order("B", "Planifié")];

    let (kept, dropped) = reduce_master(orders.clone(), MasterDuplicates::Reduce).unwrap();
    assert_eq!(kept.len(), 2);
    assert_eq!(dropped, 1);
    assert!(kept[0].is_planned);

    assert!(matches!(
        reduce_master(orders, MasterDuplicates::Reject),
        Err(AppError::DuplicateKeys { .. })
    ));
}

#[test]
fn test_left_join_keeps_unmatched_orders() {
    let orders = vec![order("1", "Planifié"), order("2", "Non planifié")];
    let assignments = reduce_assignments(&[entry("1", "X", "T1", 1.0)], TieBreak::MostHours);
    let rows = enrich(&orders, &assignments, None).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].technician, None);
    assert_eq!(rows[1].team_or("(none)"), "(none)");
}

#[test]
fn test_unreduced_timesheet_fans_out() {
    let orders = vec![order("1", "Planifié")];
    let raw = vec![
        Assignment {
            key: "1".to_string(),
            technician: "X".to_string(),
            team: "T1".to_string(),
            hours: 1.0,
        },
        Assignment {
            key: "1".to_string(),
            technician: "Y".to_string(),
            team: "T2".to_string(),
            hours: 1.0,
        },
    ];

    let joined = join_assignments(&orders, &raw);
    assert_eq!(joined.len(), 2);
    assert!(matches!(
        check_grain(&joined),
        Err(AppError::FanOut { rows: 2, keys: 1 })
    ));
}

#[test]
fn test_unreduced_equipment_fans_out() {
    let orders = vec![order("1", "Planifié")];
    let records = vec![equipment("1", "CARRIER"), equipment("1", "DAIKIN")];
    assert!(matches!(
        enrich(&orders, &[], Some(records.as_slice())),
        Err(AppError::FanOut { .. })
    ));
    assert!(enrich(&orders, &[], Some(reduce_equipment(&records).as_slice())).is_ok());
}

#[test]
fn test_kpi_distinct_keys_and_rounding() {
    let rows: Vec<ReportRow> = [
        order("1", "Planifié"),
        order("2", "Non planifié"),
        order("3", "Non planifié"),
    ]
    .iter()
    .map(ReportRow::from_work_order)
    .collect();

    let kpi = compute_kpi(&rows);
    assert_eq!(kpi.total, 3);
    assert_eq!(kpi.planned, 1);
    assert_eq!(kpi.unplanned, 2);
    assert_eq!(kpi.rate, 33.33);
    assert!((0.0..=100.0).contains(&kpi.rate));

    let mut reversed = rows.clone();
    reversed.reverse();
    assert_eq!(compute_kpi(&reversed), kpi);

    assert_eq!(compute_kpi(&[]).rate, 0.0);
    assert_eq!(round2(66.666), 66.67);
}
