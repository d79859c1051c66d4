//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider
//!     → FileSpanExporter → otlp::batch_document → RotatingWriter
//! ```
//!
//! The trace file is `<data_dir>/tooldeck-otlp.json`, one OTLP document per
//! exported batch. It is rotated at 5 MB and the three most recent backups
//! are kept as `tooldeck-otlp.json.1` through `.3`.
//!
//! Setup failures leave the process without a subscriber; nothing about the
//! catalog depends on tracing being installed.

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use rotation::RotatingWriter;
