use std::fmt;
use chrono::{DateTime, Utc};
use crate::manager_storage::ObjectLocation;

/// Outcome of one successful pipeline run
#[derive(Debug)]
pub struct RunReport {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub location: ObjectLocation,
    pub bytes: usize,
    pub extract_attempts: u32,
    pub upload_attempts: u32,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "stored {} bytes at {} (extract attempts: {}, upload attempts: {}, took {} ms)",
            self.bytes,
            self.location,
            self.extract_attempts,
            self.upload_attempts,
            (self.finished - self.started).num_milliseconds())
    }
}
