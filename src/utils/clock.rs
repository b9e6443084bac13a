use chrono::{DateTime, Local};
#[cfg(test)]
use mockall::automock;

/// Represents an entity responsible for providing dates across application. Reports and logs are
/// keyed by the local date this returns, which lets tests pin the day.
#[cfg_attr(test, automock)]
pub trait Clock: Sync + Send + 'static {
    fn time(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }
}
