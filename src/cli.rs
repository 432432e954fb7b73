use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "unshadow",
    version,
    about = "Reproduce and diagnose Python module shadowing"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dependency import name to probe (default: cffi)"
    )]
    pub package: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reproduce the shadowing failure inside a throwaway uv project
    /// (the default when no subcommand is given).
    Reproduce {
        #[arg(long, help = "Path to the uv binary (overrides UV_BINARY)")]
        uv: Option<String>,
    },
    /// Inspect the current directory and interpreter search path for
    /// shadowing artifacts; exits with the number of issues found.
    Diagnose {
        #[arg(long, help = "Python interpreter used for probes")]
        python: Option<String>,
    },
}
