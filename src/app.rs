//! Runs resolved lookups against the service and prints the results.

use std::io::{self, Write};

use anyhow::Result;

use crate::arch::Arch;
use crate::cli::Lookup;
use crate::client::SyscallApi;
use crate::error::LookupError;
use crate::present::Presenter;
use crate::record::RecordSet;

/// Run every lookup in order.
///
/// A failed lookup is printed and the next one still runs. Only failures to
/// write the output are returned.
pub fn run<A, W>(api: &A, presenter: &mut Presenter<W>, lookups: &[Lookup]) -> Result<()>
where
    A: SyscallApi + ?Sized,
    W: Write,
{
    for lookup in lookups {
        match lookup {
            Lookup::Convention(arch) => match api.fetch_convention(*arch) {
                Ok(set) => presenter.convention(*arch, &set)?,
                Err(err) => presenter.lookup_error(&err)?,
            },
            Lookup::Syscall { name, arch } => {
                match syscall_records(api, name, *arch) {
                    Ok(set) => presenter.syscall(name, &set)?,
                    Err(err) => presenter.lookup_error(&err)?,
                }
            }
        }
    }
    presenter.flush()?;
    Ok(())
}

/// Treat a reader that went away early (`| head`) as a normal end of output.
pub fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(err)
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe) =>
        {
            Ok(())
        }
        other => other,
    }
}

/// Fetch a syscall and apply the architecture filter.
///
/// The filter only narrows array answers. A single-object answer is shown
/// unfiltered even when it is for another architecture.
pub fn syscall_records<A>(api: &A, name: &str, arch: Option<Arch>) -> Result<RecordSet, LookupError>
where
    A: SyscallApi + ?Sized,
{
    let set = api.fetch_syscall(name)?;
    let Some(arch) = arch else {
        return Ok(set);
    };

    let before = set.len();
    let set = set.filter_arch(arch);
    tracing::debug!(
        "{}: kept {} of {} records for {}",
        name,
        set.len(),
        before,
        arch
    );
    if set.is_empty() {
        return Err(LookupError::NoMatchingEntry {
            syscall: name.to_string(),
            arch,
        });
    }
    Ok(set)
}
