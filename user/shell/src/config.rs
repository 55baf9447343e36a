use log::LevelFilter;
use ulib::ExecFormat;

/// Compile-time shell settings. There are no config files or environment.
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    pub log_level: LevelFilter,
    pub exec_format: ExecFormat,
    pub prompt_marker: &'static str,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: if cfg!(feature = "verbose") {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
            exec_format: ExecFormat::Detect,
            prompt_marker: "> ",
        }
    }
}
