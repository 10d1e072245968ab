use std::fmt;

use crate::arch::Arch;

/// What a lookup was asking the service about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Convention(Arch),
    Syscall(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Convention(arch) => write!(f, "architecture {arch}"),
            Subject::Syscall(name) => write!(f, "syscall {name}"),
        }
    }
}

/// Failure of a single lookup.
///
/// These never abort the invocation: they are printed in place of the table
/// and the next lookup still runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service answered with something other than 200.
    Http { status: u16, subject: Subject },
    /// The architecture filter removed every syscall record.
    NoMatchingEntry { syscall: String, arch: Arch },
    /// The request never produced a response.
    Transport { subject: Subject, message: String },
    /// A 200 response whose body could not be used.
    InvalidResponse { subject: Subject, message: String },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Http {
                status,
                subject: Subject::Convention(arch),
            } => write!(
                f,
                "Error fetching data for architecture {arch}. Status Code: {status}"
            ),
            LookupError::Http {
                status,
                subject: Subject::Syscall(name),
            } => write!(
                f,
                "Error fetching syscall data for {name}. Status Code: {status}"
            ),
            LookupError::NoMatchingEntry { syscall, arch } => write!(
                f,
                "No syscall entry found for '{syscall}' on architecture '{arch}'."
            ),
            LookupError::Transport { subject, message } => {
                write!(f, "Error contacting the syscall service for {subject}: {message}")
            }
            LookupError::InvalidResponse { subject, message } => {
                write!(f, "Unexpected response for {subject}: {message}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Failure to turn the command line into at least one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    MissingArgument,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingArgument => write!(
                f,
                "Error: You must provide either an architecture or a syscall. Use -h/--help to get help."
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
