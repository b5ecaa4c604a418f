mod clipboard_writer;
mod status_sink;

pub use clipboard_writer::ClipboardWriter;
pub use status_sink::StatusSink;
