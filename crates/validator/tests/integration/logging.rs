use std::io;
use std::sync::{Arc, Mutex};

use paramguard_validator::prelude::*;

use crate::index_schema;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn logs_defaults_and_rejections() {
    let logs = with_captured_logs(|| {
        let mut params = params! { "page" => "x", "exclusive_1" => "a" };
        let err = validate(&mut params, &index_schema()).unwrap_err();
        assert_eq!(err.param(), Some("page"));
    });

    assert!(logs.contains("applying default"), "{logs}");
    assert!(logs.contains("parameter rejected"), "{logs}");
    assert!(logs.contains("type_mismatch"), "{logs}");
}

#[test]
fn successful_validation_traces_coercions() {
    let logs = with_captured_logs(|| {
        let mut params = params! { "page" => "2", "exclusive_2" => "b" };
        validate(&mut params, &index_schema()).unwrap();
    });

    assert!(logs.contains("coerced"), "{logs}");
    assert!(!logs.contains("parameter rejected"), "{logs}");
}
