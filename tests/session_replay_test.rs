use indoc::indoc;
use mediamix::script::{parse_script, ScriptFormat};
use mediamix::{replay, Action, AllocationSet, ChannelRateTable, ForecastPair, PerformancePoint, Session};
use pretty_assertions::assert_eq;
use std::path::Path;

fn fresh_session() -> Session {
    Session::new(
        AllocationSet::new(20, 35, 30, 15),
        ChannelRateTable::default(),
        PerformancePoint::baseline("Week 1", 100.0, 200),
    )
}

const SCRIPT: &str = indoc! {r#"
    [[actions]]
    action = "apply_improvement"
    label = "Refresh creative"
    improvement_pct = 10.0
    suggested = ["Rotate hero image"]
    implemented = ["Rotated hero image"]

    [[actions]]
    action = "set_allocation"
    channel = "Digital"
    value = 100.0

    [[actions]]
    action = "apply_composite"
    label = "Rebalance toward Digital"
    requested = ["Cap OOH at 10%"]

    [[actions]]
    action = "record_actuals"
    label = "Week 4"
    cpa = 85.0
    conversions = 230
"#};

#[test]
fn test_script_replay_builds_expected_logs() {
    let script = parse_script(SCRIPT, ScriptFormat::Toml, Path::new("plan.toml")).unwrap();
    let end = replay(fresh_session(), &script.actions);

    let forecasts: Vec<ForecastPair> = end.performance().iter().map(|p| p.forecast()).collect();
    assert_eq!(
        forecasts,
        vec![
            ForecastPair::new(100.0, 200),
            ForecastPair::new(90.0, 220),
            // Digital-only allocation scores 12.0
            ForecastPair::new(79.2, 246),
            ForecastPair::new(79.2, 246),
        ]
    );

    let labels: Vec<&str> = end.activity().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Refresh creative", "Rebalance toward Digital"]);

    let first = end.activity().iter().next().unwrap();
    assert_eq!(first.suggested_texts, vec!["Rotate hero image".to_string()]);
    assert_eq!(first.implemented_texts, vec!["Rotated hero image".to_string()]);
    assert!(first.requested_texts.is_empty());

    let latest = end.performance().latest();
    assert_eq!(latest.actual(), ForecastPair::new(85.0, 230));
}

#[test]
fn test_replay_leaves_starting_session_untouched() {
    let start = fresh_session();
    let actions = vec![
        Action::apply_improvement("One", 5.0),
        Action::apply_improvement("Two", 5.0),
    ];
    let end = replay(start.clone(), &actions);

    assert_eq!(start, fresh_session());
    assert_eq!(end.performance().len(), 3);
    assert_eq!(start.performance().len(), 1);
}

#[test]
fn test_empty_replay_is_identity() {
    let end = replay(fresh_session(), &Vec::<Action>::new());
    assert_eq!(end, fresh_session());
}

#[test]
fn test_intermediate_sessions_stay_valid() {
    let s0 = fresh_session();
    let s1 = s0.apply(&Action::apply_improvement("A", 20.0));
    let s2 = s1.apply(&Action::apply_improvement("B", 20.0));

    assert_eq!(s1.performance().latest().forecast(), ForecastPair::new(80.0, 240));
    assert_eq!(s2.performance().latest().forecast(), ForecastPair::new(64.0, 288));
    assert_eq!(s1.activity().len(), 1);
}
