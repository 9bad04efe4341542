//! The process-wide statistic sink: every statistic is printed to stdout as
//! `{prefix} {name}={value}`, once logging has been turned on.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

#[derive(Debug, Clone, Copy)]
struct StatisticFormat {
    prefix: &'static str,
    casing: Option<Case>,
}

impl StatisticFormat {
    fn line(&self, name: impl Display, value: impl Display) -> String {
        let name = match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        format!("{} {name}={value}", self.prefix)
    }
}

static STATISTIC_FORMAT: OnceLock<StatisticFormat> = OnceLock::new();

/// Turns on statistic logging; statistic names are converted to `casing` if one is given.
///
/// Only the first call has an effect.
pub fn configure_statistic_logging(prefix: &'static str, casing: Option<Case>) {
    let _ = STATISTIC_FORMAT.get_or_init(|| StatisticFormat { prefix, casing });
}

/// Logs the statistic `name` with `value`, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(format) = STATISTIC_FORMAT.get() {
        let _ = writeln!(stdout().lock(), "{}", format.line(name, value));
    }
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_FORMAT.get().is_some()
}
