use clap::Parser;

/// The interactive protocol itself takes no arguments; the only switch is
/// the log level.
#[derive(Debug, Clone, Parser)]
#[command(name = "orgsearch")]
#[command(about = "Interactive attribute-based search over a demo company directory")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
