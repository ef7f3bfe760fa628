use std::{
    fmt::Arguments,
    io::Write,
    time::{Duration, Instant},
};

use ansi_rgb::{red, yellow, Foreground};
use env_logger::Builder;
use log::{Level, LevelFilter};
use rgb::{Rgb, RGB8};

fn level_to_rgb(level: Level) -> RGB8 {
    match level {
        Level::Error => red(),
        Level::Warn => yellow(),
        Level::Info => Rgb::new(0x00, 0xBC, 0x12),
        Level::Debug => Rgb::new(0x16, 0x85, 0xA9),
        Level::Trace => Rgb::new(128, 128, 128),
    }
}

fn level_icon(level: Level) -> &'static str {
    match level {
        Level::Error => "💥",
        Level::Warn => "⚠️",
        Level::Info => "💡",
        Level::Debug => "🐛",
        Level::Trace => "🔍",
    }
}

fn render(level: Level, elapsed: Duration, target: &str, line: u32, args: &Arguments) -> String {
    format!(
        "{} {:.3?} [{target}:{line}] {args}",
        level_icon(level),
        elapsed
    )
}

/// Stderr logger at `fallback`, with the icon/colour record layout.
fn builder(fallback: LevelFilter) -> Builder {
    let start = Instant::now();
    let mut builder = Builder::new();
    builder.filter_level(fallback).format(move |buf, record| {
        let line = render(
            record.level(),
            start.elapsed(),
            record.target(),
            record.line().unwrap_or(0),
            record.args(),
        );
        writeln!(buf, "{}", line.fg(level_to_rgb(record.level())))
    });
    builder
}

/// Installs the logger. `RUST_LOG` filters, module-scoped or not, override
/// `fallback`.
pub fn init(fallback: LevelFilter) {
    let _ = builder(fallback).parse_default_env().try_init();
}
