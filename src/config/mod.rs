use crate::domain::model::Selector;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "lambda-showcase")]
#[command(about = "Walks through closures bound to single-method function shapes")]
pub struct CliConfig {
    /// Demonstration to run, "0" through "6"; anything else runs "0"
    #[arg(allow_hyphen_values = true)]
    pub selector: String,

    /// Everything after the selector is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn selector(&self) -> Selector {
        Selector::from(self.selector.as_str())
    }
}
