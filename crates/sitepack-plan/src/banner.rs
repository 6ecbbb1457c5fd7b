//! Banner comment prepended to emitted bundle files.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

/// `"{name} {version} {Y}/{M}/{D} {h}:{m}:{s}"`, fields not zero padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub built_at: NaiveDateTime,
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.built_at;
        write!(
            f,
            "{} {} {}/{}/{} {}:{}:{}",
            self.name,
            self.version,
            t.year(),
            t.month(),
            t.day(),
            t.hour(),
            t.minute(),
            t.second()
        )
    }
}
