
use chrono::{Local, NaiveDateTime, Timelike};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait TimeProvider : Send + Sync {
    ///
    /// The current local wall-clock time, truncated to whole seconds
    ///
    fn naive_local_now(&self) -> NaiveDateTime;
}

pub struct CoreTimeProvider;
impl CoreTimeProvider {
    pub fn new() -> Self {
        Self
    }
}
impl TimeProvider for CoreTimeProvider {
    fn naive_local_now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}
