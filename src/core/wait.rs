use crate::config::registry::{api_summary, extra_string_help, seconds_help, DEFAULTS};
use crate::utils::error::Result;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Parameters for a single print-then-wait call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitRequest {
    pub seconds: u64,
    pub extra_string: String,
}

impl Default for WaitRequest {
    fn default() -> Self {
        Self {
            seconds: DEFAULTS.seconds,
            extra_string: DEFAULTS.extra_string.to_string(),
        }
    }
}

impl WaitRequest {
    pub fn new(seconds: u64, extra_string: impl Into<String>) -> Self {
        Self {
            seconds,
            extra_string: extra_string.into(),
        }
    }

    pub fn run(&self) -> Result<()> {
        wait_a_second(self.seconds, &self.extra_string)
    }

    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        wait_a_second_to(out, self.seconds, &self.extra_string)
    }
}

/// Formats `Waiting {seconds} seconds.`, appending ` {extra_string}` when it
/// is non-empty.
pub fn status_line(seconds: u64, extra_string: &str) -> String {
    if extra_string.is_empty() {
        format!("Waiting {} seconds.", seconds)
    } else {
        format!("Waiting {} seconds. {}", seconds, extra_string)
    }
}

#[doc = api_summary!()]
///
/// # Arguments
///
#[doc = concat!("* `seconds`: ", seconds_help!())]
#[doc = concat!("* `extra_string`: ", extra_string_help!())]
///
/// The stdout lock is released before the delay starts.
pub fn wait_a_second(seconds: u64, extra_string: &str) -> Result<()> {
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_status_line(&mut out, seconds, extra_string)?;
    }
    sleep_seconds(seconds);
    Ok(())
}

/// Same as [`wait_a_second`] but writes the status line to `out`.
pub fn wait_a_second_to<W: Write>(out: &mut W, seconds: u64, extra_string: &str) -> Result<()> {
    write_status_line(out, seconds, extra_string)?;
    sleep_seconds(seconds);
    Ok(())
}

fn write_status_line<W: Write>(out: &mut W, seconds: u64, extra_string: &str) -> Result<()> {
    writeln!(out, "{}", status_line(seconds, extra_string))?;
    out.flush()?;
    Ok(())
}

fn sleep_seconds(seconds: u64) {
    tracing::debug!("Sleeping for {} seconds", seconds);
    thread::sleep(Duration::from_secs(seconds));
    tracing::debug!("Done sleeping");
}

/// Runs [`wait_a_second`] with both parameters taken from the registry.
pub fn wait_with_defaults() -> Result<()> {
    WaitRequest::default().run()
}
