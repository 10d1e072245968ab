//! syscall-fetch library - lookups against the syscall information service.
//!
//! The binary is a thin wrapper: it resolves the command line into
//! [`Lookup`]s, then hands them to [`app::run`] with an [`ApiClient`] and a
//! [`Presenter`] writing to stdout.
//!
//! # Modules
//!
//! - [`arch`] - the supported architectures
//! - [`cli`] - command line flags and lookup resolution
//! - [`client`] - HTTP access to the service
//! - [`record`] - schema-less result records and architecture filtering
//! - [`present`] - grid table and error line rendering
//! - [`app`] - runs lookups and routes results to the presenter
//!
//! # Example
//!
//! ```no_run
//! use syscall_fetch::{app, ApiClient, ClientConfig, Lookup, Palette, Presenter};
//! use syscall_fetch::Arch;
//!
//! let client = ApiClient::new(ClientConfig::default()).expect("bad config");
//! let mut presenter = Presenter::new(std::io::stdout(), Palette::plain());
//! app::run(&client, &mut presenter, &[Lookup::Convention(Arch::X64)])
//!     .expect("Failed to write output");
//! ```

pub mod app;
pub mod arch;
pub mod cli;
pub mod client;
pub mod error;
pub mod logging;
pub mod present;
pub mod record;

pub use arch::Arch;
pub use cli::{Cli, Lookup};
pub use client::{ApiClient, ClientConfig, SyscallApi, DEFAULT_API_URL};
pub use error::{LookupError, ResolveError, Subject};
pub use present::{ColorMode, Palette, Presenter};
pub use record::{Record, RecordSet};
