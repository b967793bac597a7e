use clap::{Parser, Subcommand, error::ErrorKind};

#[derive(Debug, Parser)]
#[command(name = "spotipi")]
#[command(about = "Serve a local music folder as a track catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the catalog server
    Start {
        /// Port to listen on, overrides `server.port` from the config
        #[arg(value_parser = parse_port)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse the process arguments. Usage errors exit with status 1.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            let code = exit_code(&err);
            let _ = err.print();
            std::process::exit(code)
        })
    }
}

/// Help and version output succeed; every other parse error is a usage error.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn parse_port(arg: &str) -> Result<u16, String> {
    const INVALID: &str = "Invalid port number. Please specify a port between 1 and 65535.";
    match arg.trim().parse::<u32>() {
        Ok(port @ 1..=65535) => u16::try_from(port).map_err(|_| INVALID.to_string()),
        _ => Err(INVALID.to_string()),
    }
}
