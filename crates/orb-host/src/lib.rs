//! ORB host driver
//!
//! Drives a guest program against a fresh linear memory and host bridge
//! and translates the outcome into a terminated-run report. A fatal guest
//! fault unwinds out of the host-import call as an `Err`; the driver is
//! the single place that turns it into a failed-run status instead of
//! letting it escape as a bare error.

use serde::Serialize;

use orb_core::{Bridge, LinearMemory, OrbConfig, OrbError, OrbResult, TaggedValue};

pub mod demos;

/// An externally compiled program, seen only through its execution entry
/// point. The program owns all writes to the memory it is handed and may
/// interact with the outside world only through the bridge.
pub trait GuestProgram {
    fn run(&self, memory: &mut LinearMemory, host: &mut Bridge<String>)
        -> OrbResult<TaggedValue>;
}

/// Terminal status of a run
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RunStatus {
    /// The guest ran to completion
    Completed,
    /// The guest reported a fatal fault; `code` is the raw fault code
    Faulted { code: u64 },
    /// The bridge itself failed (defective guest, not a reported fault)
    HostError { message: String },
}

/// Everything a caller needs to present a finished run. Output collected
/// before a fault is retained, but the status marks the run as failed so
/// it is never presented as successful.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub output: String,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Run `guest` once against a fresh memory and bridge
pub fn run(guest: &dyn GuestProgram, config: &OrbConfig) -> RunReport {
    let mut memory = match LinearMemory::new(config) {
        Ok(m) => m,
        Err(e) => {
            return RunReport {
                status: RunStatus::HostError {
                    message: e.to_string(),
                },
                output: String::new(),
            }
        }
    };
    let mut host = Bridge::new(String::new());

    let status = match guest.run(&mut memory, &mut host) {
        Ok(_) => RunStatus::Completed,
        Err(OrbError::GuestFault { code, .. }) => RunStatus::Faulted { code },
        Err(e) => RunStatus::HostError {
            message: e.to_string(),
        },
    };

    RunReport {
        status,
        output: host.into_sink(),
    }
}
