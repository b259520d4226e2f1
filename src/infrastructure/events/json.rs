//! JSON Event Sink
//!
//! Outputs inventory events as NDJSON for CI/automation consumption.

use crate::domain::ports::{InventoryEvent, InventoryEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stderr, keeping stdout for results
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl InventoryEventSink for JsonEventSink {
    fn on_event(&self, event: InventoryEvent) {
        let json = match event {
            InventoryEvent::CheckedOut {
                requested,
                resolved,
            } => serde_json::json!({
                "event": "checkout",
                "requested": requested,
                "resolved": resolved,
            }),

            InventoryEvent::ServicesLocated { reference, count } => serde_json::json!({
                "event": "located",
                "reference": reference,
                "count": count,
            }),

            InventoryEvent::ServiceExcluded { name, directory } => serde_json::json!({
                "event": "excluded",
                "name": name,
                "directory": directory.display().to_string(),
            }),

            InventoryEvent::BuildStarted { name, directory } => serde_json::json!({
                "event": "build_start",
                "name": name,
                "directory": directory.display().to_string(),
            }),

            InventoryEvent::ServiceBuilt {
                name,
                artifact,
                checksum,
            } => serde_json::json!({
                "event": "built",
                "name": name,
                "artifact": artifact.display().to_string(),
                "checksum": checksum,
            }),

            InventoryEvent::InventoryCompleted { reference, count } => serde_json::json!({
                "event": "inventory_complete",
                "reference": reference,
                "count": count,
            }),

            InventoryEvent::DiffCompleted {
                base,
                compare,
                total,
                changed,
            } => serde_json::json!({
                "event": "diff_complete",
                "base": base,
                "compare": compare,
                "total": total,
                "changed": changed,
            }),
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_sink_outputs_checkout_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InventoryEvent::CheckedOut {
            requested: "master".to_string(),
            resolved: "refs/heads/master".to_string(),
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("\"event\":\"checkout\""));
        assert!(output.contains("\"resolved\":\"refs/heads/master\""));
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(InventoryEvent::BuildStarted {
            name: "api".to_string(),
            directory: PathBuf::from("/repo/services/api"),
        });
        sink.on_event(InventoryEvent::DiffCompleted {
            base: "refs/heads/master".to_string(),
            compare: "refs/heads/feature".to_string(),
            total: 3,
            changed: 2,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["event"], "diff_complete");
        assert_eq!(last["changed"], 2);
    }
}
