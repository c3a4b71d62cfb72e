use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

pub struct Logger;

impl CologStyle for Logger {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "*",
            Level::Debug => "D",
            Level::Trace => "T",
        }
    }

    fn prefix_token(&self, level: &Level) -> String {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        format!(
            "{} [{}]",
            timestamp.as_str().dimmed(),
            self.level_color(level, self.level_token(level))
        )
    }
}

impl Logger {
    pub fn init(level: LevelFilter) {
        let mut builder = env_logger::Builder::new();
        builder.format(colog::formatter(Logger));
        builder.filter_level(level);
        builder.init();
    }
}
