pub mod cli;
pub mod errors;
pub mod filter;
pub mod input;

pub use cli::{Cli, cli_parse};
pub use errors::InputError;
pub use filter::{FilterOptions, filter_lines};
pub use input::InputSource;

use std::io::{self, BufWriter, Write};

impl FilterOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        FilterOptions {
            first: cli.first,
            last: cli.last,
            timestamps: cli.timestamps,
            ipv4: cli.ipv4,
            ipv6: cli.ipv6,
        }
    }
}

/// Opens the input named on the command line and runs the filter over it,
/// writing selected lines to stdout. Fails before producing any output when
/// the input cannot be opened.
pub fn run(cli: &Cli) -> Result<(), InputError> {
    let opts = FilterOptions::from_cli(cli);
    let source = InputSource::from_path(cli.file.clone());
    let reader = source.open()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    filter_lines(&opts, reader, &mut out)?;
    out.flush()?;

    Ok(())
}
