use clap::error::ErrorKind;
use clap::Parser;

/// The menu is fully interactive, so there is nothing to configure here beyond
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "contacts", version)]
#[command(about = "Interactive personal contact book", long_about = None)]
pub struct Cli {}

impl Cli {
    /// Answers `--help`/`--version` and exits; any other arguments are ignored
    /// so the menu always starts.
    pub fn parse_or_ignore() {
        if let Err(e) = Cli::try_parse() {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
        }
    }
}
