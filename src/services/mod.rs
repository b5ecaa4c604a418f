mod clipboard_arboard;
mod clipboard_command;
mod status_console;

pub use clipboard_arboard::ArboardClipboard;
pub use clipboard_command::CommandClipboard;
pub use status_console::ConsoleStatusSink;
