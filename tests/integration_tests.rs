use anyhow::Result;
use reference_package::{
    status_line, wait_a_second, wait_a_second_to, wait_with_defaults, WaitRequest, API_DOCS, CLI_DOCS,
    DEFAULTS,
};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_wait_blocks_for_requested_seconds() -> Result<()> {
    let mut out = Vec::new();
    let start = Instant::now();

    wait_a_second_to(&mut out, 1, "")?;

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert_eq!(String::from_utf8(out)?, "Waiting 1 seconds.\n");
    Ok(())
}

#[test]
fn test_extra_string_is_appended() -> Result<()> {
    let mut out = Vec::new();
    wait_a_second_to(&mut out, 0, "Almost there.")?;
    assert_eq!(String::from_utf8(out)?, "Waiting 0 seconds. Almost there.\n");
    Ok(())
}

#[test]
fn test_default_request_uses_registry() -> Result<()> {
    let request = WaitRequest::default();
    assert_eq!(request, WaitRequest::new(DEFAULTS.seconds, DEFAULTS.extra_string));

    let mut out = Vec::new();
    let start = Instant::now();
    request.run_to(&mut out)?;

    assert!(start.elapsed() >= Duration::from_secs(DEFAULTS.seconds));
    assert_eq!(
        String::from_utf8(out)?,
        format!("{}\n", status_line(DEFAULTS.seconds, ""))
    );
    Ok(())
}

#[test]
fn test_repeated_calls_are_independent() -> Result<()> {
    let mut out = Vec::new();
    wait_a_second_to(&mut out, 0, "first")?;
    wait_a_second_to(&mut out, 0, "")?;
    assert_eq!(
        String::from_utf8(out)?,
        "Waiting 0 seconds. first\nWaiting 0 seconds.\n"
    );
    Ok(())
}

#[test]
fn test_docs_are_shared() {
    assert_eq!(CLI_DOCS.seconds, API_DOCS.seconds);
}

#[test]
fn test_wait_with_defaults_sleeps_for_default_seconds() -> Result<()> {
    let start = Instant::now();
    wait_with_defaults()?;
    assert!(start.elapsed() >= Duration::from_secs(DEFAULTS.seconds));
    Ok(())
}

#[test]
fn test_stdout_is_released_during_the_delay() -> Result<()> {
    let waiter = thread::spawn(|| wait_a_second(2, ""));
    thread::sleep(Duration::from_millis(200));

    let start = Instant::now();
    writeln!(io::stdout(), "written while another thread waits")?;
    let blocked = start.elapsed();

    waiter.join().expect("waiting thread panicked")?;
    assert!(blocked < Duration::from_millis(500), "stdout write blocked for {:?}", blocked);
    Ok(())
}
