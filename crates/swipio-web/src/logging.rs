#![forbid(unsafe_code)]

//! Console logging for the page.
//!
//! Nothing is installed unless the page config names a `log_level`, so a
//! production page stays silent. When enabled, a `tracing-subscriber` fmt
//! layer writes each event as one `console.log` line (no timestamps, since
//! `std::time` is unavailable on `wasm32-unknown-unknown`).

use tracing_subscriber::filter::LevelFilter;

/// Parse the configured level; `None` when logging should stay off.
#[must_use]
pub fn level_filter(level: Option<&str>) -> Option<LevelFilter> {
    let filter = level?.trim().parse::<LevelFilter>().ok()?;
    (filter != LevelFilter::OFF).then_some(filter)
}

#[cfg(target_arch = "wasm32")]
pub(crate) use console::install;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    pub(crate) struct ConsoleWriter {
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
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        }
    }

    pub(crate) struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                buf: Vec::with_capacity(128),
            }
        }
    }

    /// Install the console subscriber. A second call is a no-op.
    pub(crate) fn install(filter: LevelFilter) {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter)
            .with_max_level(filter)
            .without_time()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
