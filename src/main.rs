use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use syscall_fetch::logging::initialize_logging;
use syscall_fetch::{app, ApiClient, Cli, Palette, Presenter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.verbose);

    let palette = Palette::new(cli.color);
    // colored has its own terminal detection; make it agree with ours.
    colored::control::set_override(palette.enabled());

    let mut presenter = Presenter::new(io::stdout().lock(), palette);

    let lookups = match cli.lookups() {
        Ok(lookups) => lookups,
        Err(err) => {
            app::ignore_broken_pipe(
                presenter
                    .resolve_error(&err)
                    .and_then(|()| presenter.flush())
                    .map_err(Into::into),
            )?;
            process::exit(1);
        }
    };

    let client = ApiClient::new(cli.client_config())?;
    app::ignore_broken_pipe(app::run(&client, &mut presenter, &lookups))
}
