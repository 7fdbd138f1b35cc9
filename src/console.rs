//! `tracing` output for the browser: each formatted event goes to the
//! `console` method matching its level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("svg_icon=debug,info"))
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and logs it when dropped.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = take_line(&mut self.buf) else {
            return;
        };
        let msg = JsValue::from(line);
        if self.level == Level::ERROR {
            web_sys::console::error_1(&msg);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&msg);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&msg);
        } else {
            web_sys::console::debug_1(&msg);
        }
    }
}

fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    let line = String::from_utf8_lossy(buf).trim_end().to_string();
    buf.clear();
    (!line.is_empty()).then_some(line)
}
