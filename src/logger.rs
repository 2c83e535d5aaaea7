use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

struct Logger {
    level: LevelFilter,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let prefix = match record.level() {
            Level::Error => "error: ".red().bold(),
            Level::Warn => "warn:  ".yellow().bold(),
            Level::Info => "info:  ".cyan().bold(),
            Level::Debug => "debug: ".dimmed().bold(),
            Level::Trace => "trace: ".dimmed(),
        };
        eprintln!("{}{}", prefix, record.args());
    }

    fn flush(&self) {}
}

pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    let level = level_filter(verbose);
    log::set_boxed_logger(Box::new(Logger { level })).map(|()| log::set_max_level(level))
}
