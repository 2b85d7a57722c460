use broadside::{CellView, EventKind, FireOutcome, FiredAt, GameEvent, Location};

#[test]
fn fired_at_event_json_shape() {
    let event = GameEvent::FiredAt(FiredAt {
        location: Location::new(1, 2, 3),
        result: FireOutcome::Hit,
    });
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "FiredAt": {
                "location": {"row": 2, "column": 3, "board": 1},
                "result": "Hit"
            }
        })
    );
    let back: GameEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
    assert_eq!(back.kind(), EventKind::FiredAt);
}

#[test]
fn json_observer_writes_one_line_per_event() {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);
    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buf = SharedBuf::default();
    let mut observer = broadside::cli::json_observer(buf.clone());
    for result in [FireOutcome::Hit, FireOutcome::Miss] {
        observer(&GameEvent::FiredAt(FiredAt {
            location: Location::new(0, 0, 0),
            result,
        }));
    }
    let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"Hit\""));
    assert!(lines[1].contains("\"Miss\""));
}

#[test]
fn cell_view_labels() {
    assert_eq!(CellView::default(), CellView::Unknown);
    assert_eq!(CellView::Unknown.label(), "unknown");
    assert_eq!(CellView::from(FireOutcome::Hit).label(), "hit");
    assert_eq!(CellView::from(FireOutcome::Miss).label(), "miss");
}
