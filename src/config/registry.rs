//! Default parameter values and help text shared by the CLI and the library.
//!
//! Everything here is a `const`, so the registry is fixed at compile time and
//! read the same way from every call site.

/// Default values for the wait parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitDefaults {
    pub seconds: u64,
    pub extra_string: &'static str,
}

/// Help text for the command-line entry point.
#[derive(Debug, Clone, Copy)]
pub struct CliDocs {
    pub about: &'static str,
    pub seconds: &'static str,
}

/// Documentation for the library function and its arguments.
#[derive(Debug, Clone, Copy)]
pub struct ApiDocs {
    pub summary: &'static str,
    pub seconds: &'static str,
    pub extra_string: &'static str,
}

pub const DEFAULTS: WaitDefaults = WaitDefaults {
    seconds: 1,
    extra_string: "",
};

// Expand to string literals so the text also works in `#[doc = ...]`.
macro_rules! seconds_help {
    () => {
        "How many seconds to wait."
    };
}

macro_rules! extra_string_help {
    () => {
        "Text appended to the status line, separated by a space. Omitted when empty."
    };
}

macro_rules! api_summary {
    () => {
        "Print a status line, then block the calling thread for the given number of seconds."
    };
}

pub(crate) use {api_summary, extra_string_help, seconds_help};

pub const CLI_DOCS: CliDocs = CliDocs {
    about: "Just wait a second.",
    seconds: seconds_help!(),
};

pub const API_DOCS: ApiDocs = ApiDocs {
    summary: api_summary!(),
    seconds: seconds_help!(),
    extra_string: extra_string_help!(),
};
