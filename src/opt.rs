use clap::{ArgAction, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve the local filesystem over HTTP.
///
/// GET reads a file (or lists a directory), PUT overwrites a file, DELETE
/// removes a file or empty directory, MKCOL creates a directory. Request
/// paths are resolved against the serve root with no sandboxing, so `..`
/// segments can escape it; only expose this to clients you trust.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Socket address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub listen: SocketAddr,

    /// Directory request paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let options = Options::parse_from(["httpfs"]);
        assert_eq!(options.listen.port(), 8000);
        assert_eq!(options.root, PathBuf::from("."));
    }
}
