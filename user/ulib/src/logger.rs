use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::eprintln;

static LOGGER: Logger = Logger;

/// Writes `[<level>] <message>` lines to the stderr handle.
pub struct Logger;

pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

pub fn level_char(level: Level) -> char {
    match level {
        Level::Info => '*',
        Level::Warn => 'W',
        Level::Error => 'E',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", level_char(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}
