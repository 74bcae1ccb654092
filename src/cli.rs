use clap::Parser;
use std::path::PathBuf;

/// Prints the lines of a log file that match the criterion specified by OPTIONS.
#[derive(Parser, Debug)]
#[command(
    name = "util",
    version,
    about,
    after_help = "If FILE is omitted, standard input is used instead."
)]
pub struct Cli {
    /// Print the first NUM lines.
    #[arg(short = 'f', long, value_name = "NUM", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub first: Option<usize>,

    /// Print the last NUM lines.
    #[arg(short = 'l', long, value_name = "NUM", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub last: Option<usize>,

    /// Print lines that contain a timestamp in HH:MM:SS format.
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Print lines that contain an IPv4 address, matching IPs are highlighted.
    #[arg(short = 'i', long)]
    pub ipv4: bool,

    /// Print lines that contain an IPv6 address, matching IPs are highlighted.
    #[arg(short = 'I', long)]
    pub ipv6: bool,

    /// Log file to read.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
