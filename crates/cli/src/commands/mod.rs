//! Command implementations for xrinputctl

pub mod checks;
pub mod rules;
pub mod run;

use std::path::PathBuf;

use clap::Args;
use xrinput_rules::Check;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Provider snapshot (JSON) to validate
    pub snapshot: PathBuf,

    /// Expected-configuration descriptor; a missing file is not an error
    #[arg(short, long, env = "XRINPUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run only these checks (repeatable); all checks by default
    #[arg(long = "check", value_name = "CHECK")]
    pub checks: Vec<Check>,

    /// Override the haptic buffer size ceiling
    #[arg(long, value_name = "SAMPLES", value_parser = clap::value_parser!(u32).range(1..))]
    pub haptic_ceiling: Option<u32>,

    /// Frame rate used for the settle wait
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u32).range(1..))]
    pub frame_rate: u32,

    /// Skip the settle wait even if the descriptor asks for one
    #[arg(long)]
    pub no_settle: bool,
}
