//! 端到端场景：通过分发器执行命令，确认回答直接注入恢复入口

use serde_json::json;
use shapecad_core::entity::ShapeId;
use shapecad_ui::{CommandError, ConfirmAction, Response, Session, SessionConfig};
use tempfile::TempDir;

fn run(session: &mut Session, line: &str) -> Response {
    session
        .execute(line)
        .unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
}

fn info(session: &mut Session, id: u64) -> serde_json::Value {
    match run(session, &format!("info {id}")) {
        Response::Info { record, .. } => record,
        other => panic!("unexpected: {other:?}"),
    }
}

fn close(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-4
}

#[test]
fn create_named_point() {
    let mut session = Session::default();
    run(&mut session, "create point 10 20 TestPoint");

    let record = info(&mut session, 1);
    assert_eq!(record["id"], json!(1));
    assert_eq!(record["name"], json!("TestPoint"));
    assert_eq!(record["x"], json!(10.0));
    assert_eq!(record["y"], json!(20.0));
    assert_eq!(record["area"], json!(0.0));
    assert_eq!(record["perimeter"], json!(0.0));
}

#[test]
fn circle_metrics() {
    let mut session = Session::default();
    run(&mut session, "create circle 0 0 5");

    let record = info(&mut session, 1);
    assert!(close(&record["area"], 78.5398));
    assert!(close(&record["perimeter"], 31.4159));
    assert_eq!(record["name"], json!("Circle 1"));
}

#[test]
fn hexagon_metrics() {
    let mut session = Session::default();
    run(&mut session, "create polygon 0 0 6 4");

    let record = info(&mut session, 1);
    assert!(close(&record["perimeter"], 24.0));
    assert!(close(&record["area"], 41.5692));
    assert_eq!(record["type"], json!("RegularPolygon"));
}

#[test]
fn negative_square_is_rejected() {
    let mut session = Session::default();
    let err = session.execute("create square 0 0 -1").unwrap_err();
    assert!(matches!(err, CommandError::Validation(_)));
    assert!(session.registry().is_empty());
    assert_eq!(session.registry().next_id(), ShapeId::new(1));
}

#[test]
fn info_on_missing_id() {
    let mut session = Session::default();
    let err = session.execute("info 1").unwrap_err();
    assert!(matches!(err, CommandError::NotFound(id) if id == ShapeId::new(1)));
}

#[test]
fn clear_two_shapes_confirmed() {
    let mut session = Session::default();
    run(&mut session, "create point 0 0");
    run(&mut session, "create line 0 0 3 4");

    let response = run(&mut session, "clear");
    assert!(matches!(
        response,
        Response::ConfirmationRequired {
            action: ConfirmAction::Clear,
            ..
        }
    ));
    assert_eq!(session.handle_line("y").unwrap(), Response::Cleared { count: 2 });
    assert_eq!(run(&mut session, "list"), Response::Empty);
}

#[test]
fn ids_are_never_reused() {
    let mut session = Session::default();
    run(&mut session, "create point 0 0");
    run(&mut session, "create point 1 1");
    run(&mut session, "delete 2");
    session.resume(true).unwrap();

    match run(&mut session, "create point 2 2") {
        Response::Created { id, .. } => assert_eq!(id, ShapeId::new(3)),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn every_shape_kind_round_trips_through_a_file() {
    let dir = TempDir::new().unwrap();
    let config = SessionConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..SessionConfig::default()
    };

    let mut session = Session::new(config.clone());
    for line in [
        "create point 1 2",
        "create line 0 0 3 4 Diagonal",
        "create circle 0 0 5",
        "create square 1 1 2",
        "create rectangle 0 0 2 3",
        "create oval 0 0 5 3",
        "create polygon 0 0 6 4 Hex",
        "create parallelepiped 0 0 0 1 2 3",
        "create tetrahedron 1 1 1 2",
    ] {
        run(&mut session, line);
    }
    run(&mut session, "delete 4");
    session.resume(true).unwrap();
    run(&mut session, "save all_kinds");

    let mut fresh = Session::new(config);
    assert!(matches!(
        run(&mut fresh, "load all_kinds"),
        Response::Loaded { count: 8, .. }
    ));
    assert_eq!(fresh.registry().snapshot(), session.registry().snapshot());
    assert_eq!(fresh.registry().next_id(), ShapeId::new(10));

    for id in [1, 2, 3, 5, 6, 7, 8, 9] {
        assert_eq!(info(&mut fresh, id), info(&mut session, id));
    }
}
