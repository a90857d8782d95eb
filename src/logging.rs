//! Console Logging
//!
//! `tracing` output formatted by `tracing-subscriber` and written to the browser console.
//! Timestamps are off: there is no system clock in wasm.

use std::io;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Buffers one formatted event and logs it on drop
pub struct ConsoleWriter {
    buf: Vec<u8>,
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
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Install the global subscriber. Debug builds log at `DEBUG`, release builds at `INFO`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(level)
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&"[LOG] subscriber already installed".into());
    }
}
