use std::time::Duration;

use clap::Parser;

use crate::arch::Arch;
use crate::client::{ClientConfig, DEFAULT_API_URL};
use crate::error::ResolveError;
use crate::present::ColorMode;

#[derive(Debug, Parser)]
#[command(name = "syscall-fetch")]
#[command(about = "Fetch calling convention or syscall details")]
#[command(version)]
pub struct Cli {
    /// Architecture (x86, x64, arm, arm64); case is ignored
    #[arg(short, long, value_enum, ignore_case = true)]
    pub arch: Option<Arch>,

    /// Syscall name (e.g. execve)
    #[arg(short, long, value_parser = parse_syscall_name)]
    pub syscall: Option<String>,

    /// Base URL of the syscall information service
    #[arg(long, env = "SYSCALL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long, env = "SYSCALL_API_TIMEOUT")]
    pub timeout: Option<u64>,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log requests and responses to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Syscall names are opaque, but must be usable as one URL path segment.
fn parse_syscall_name(value: &str) -> Result<String, String> {
    match value {
        "" => Err("syscall name must not be empty".to_string()),
        "." | ".." => Err(format!("'{value}' is not a syscall name")),
        _ => Ok(value.to_string()),
    }
}

/// One query to run against the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Convention(Arch),
    /// `arch`, when set, narrows a multi-architecture answer.
    Syscall { name: String, arch: Option<Arch> },
}

impl Cli {
    /// Resolve the flags into the lookups to run, convention first.
    pub fn lookups(&self) -> Result<Vec<Lookup>, ResolveError> {
        let mut lookups = Vec::with_capacity(2);
        if let Some(arch) = self.arch {
            lookups.push(Lookup::Convention(arch));
        }
        if let Some(name) = &self.syscall {
            lookups.push(Lookup::Syscall {
                name: name.clone(),
                arch: self.arch,
            });
        }
        if lookups.is_empty() {
            return Err(ResolveError::MissingArgument);
        }
        Ok(lookups)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
