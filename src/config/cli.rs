use clap::Parser;

/// The harness takes no behavioral options; the only flag tunes diagnostics.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hello-world")]
#[command(about = "Checks the greeting and reports the result")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,
}
