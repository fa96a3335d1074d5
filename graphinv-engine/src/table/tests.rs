//! Table-builder tests.

use graphinv_graph::{Graph, generators};

use crate::{eval::Evaluator, value::Value};

use super::InvariantTable;

fn build_sample() -> InvariantTable {
    let evaluator = Evaluator::new();
    let graphs = vec![generators::path(4), Graph::from_edges(4, &[(0, 1), (2, 3)])];
    let names = vec![String::from("p4"), String::from("two_edges")];
    let numeric = vec![String::from("order"), String::from("diameter")];
    let boolean = vec![String::from("a connected graph")];
    InvariantTable::build(&evaluator, &graphs, &names, &numeric, &boolean)
}

#[test]
fn numeric_columns_come_before_boolean_columns() {
    let table = build_sample();
    assert_eq!(table.columns(), ["order", "diameter", "a connected graph"]);
    assert_eq!(table.names(), ["p4", "two_edges"]);
}

#[test]
fn cells_hold_evaluated_values() {
    let table = build_sample();
    assert_eq!(table.cell("p4", "order"), Some(&Value::Int(4)));
    assert_eq!(table.cell("p4", "diameter"), Some(&Value::Int(3)));
    assert_eq!(
        table.cell("p4", "a connected graph"),
        Some(&Value::Bool(true))
    );
    assert_eq!(table.cell("two_edges", "order"), Some(&Value::Int(4)));
    assert_eq!(
        table.cell("two_edges", "a connected graph"),
        Some(&Value::Bool(false))
    );
}

#[test]
fn a_failing_cell_becomes_missing_data_without_aborting_the_build() {
    // The diameter is undefined on a disconnected graph; the rest of the
    // row still fills in.
    let table = build_sample();
    assert!(table.is_missing("two_edges", "diameter"));
    assert_eq!(table.cell("two_edges", "diameter"), None);
    assert_eq!(table.cell("two_edges", "order"), Some(&Value::Int(4)));
}

#[test]
fn unknown_rows_and_columns_are_not_missing_data() {
    let table = build_sample();
    assert!(!table.is_missing("k5", "order"));
    assert!(!table.is_missing("p4", "girth"));
    assert_eq!(table.cell("k5", "order"), None);
    assert_eq!(table.cell("p4", "girth"), None);
}

#[test]
#[should_panic(expected = "every graph needs exactly one name")]
fn mismatched_names_panic() {
    let evaluator = Evaluator::new();
    let graphs = vec![generators::path(2)];
    let _ = InvariantTable::build(&evaluator, &graphs, &[], &[], &[]);
}

#[test]
fn an_empty_build_is_empty() {
    let evaluator = Evaluator::new();
    let table = InvariantTable::build(&evaluator, &[], &[], &[], &[]);
    assert!(table.names().is_empty());
    assert!(table.columns().is_empty());
}

mod diagnostics {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Shared in-memory sink for formatted log lines.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer poisoned")).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_cells_emit_warn_diagnostics() {
        let sink = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer({
                let writer = sink.clone();
                move || writer.clone()
            })
            .finish();
        let table = tracing::subscriber::with_default(subscriber, build_sample);
        assert!(table.is_missing("two_edges", "diameter"));
        let log = sink.contents();
        assert!(log.contains("recording failed cell as missing"));
        assert!(log.contains("EVAL_UNDEFINED_ON_INPUT"));
        assert!(log.contains("two_edges"));
    }
}
