use crate::config::registry::{CLI_DOCS, DEFAULTS};
use crate::core::wait::WaitRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "reference-package")]
#[command(about = CLI_DOCS.about)]
pub struct CliConfig {
    #[arg(
        long,
        default_value_t = DEFAULTS.seconds as i64,
        allow_negative_numbers = true,
        help = CLI_DOCS.seconds
    )]
    pub seconds: i64,
}

impl CliConfig {
    /// Validates the parsed flags and turns them into a library request.
    pub fn to_request(&self) -> Result<WaitRequest> {
        self.validate()?;
        Ok(WaitRequest {
            seconds: self.seconds.unsigned_abs(),
            ..WaitRequest::default()
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("seconds", self.seconds)
    }
}
