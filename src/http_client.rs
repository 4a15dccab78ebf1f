//! Network access for datasets and basemap tiles.
//!
//! Both go through one `ureq` agent that identifies itself as CRASHCourse;
//! OpenStreetMap's tile policy refuses requests without a User-Agent. Bodies
//! are read with a hard byte cap so a misconfigured source cannot exhaust
//! memory.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("crashcourse/", env!("CARGO_PKG_VERSION"));

/// How many times a request is attempted and how long to wait in between.
/// The wait doubles after each failure, up to `max_delay`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RetryConfig {
    pub max_attempts: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryConfig {
    fn delay_after(&self, attempt: usize) -> Duration {
        let doublings = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        2u32.checked_pow(doublings)
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

/// The process-wide agent.
pub(crate) fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(TRANSFER_TIMEOUT)
            .timeout_write(TRANSFER_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
    })
}

/// Run `action` until it succeeds, `should_retry` rejects the error, or the
/// attempts run out. The last error is returned.
pub(crate) fn retry_with_backoff<T, E, F, R>(
    config: RetryConfig,
    mut action: F,
    mut should_retry: R,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    R: FnMut(&E) -> bool,
{
    let mut attempt = 1usize;
    loop {
        let err = match action() {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if attempt >= config.max_attempts || !should_retry(&err) {
            return Err(err);
        }
        std::thread::sleep(config.delay_after(attempt));
        attempt += 1;
    }
}

/// Buffer a response body of at most `max_bytes`.
///
/// A declared `Content-Length` over the cap fails before anything is read;
/// undeclared or understated bodies fail once the cap is crossed.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    let declared = response
        .header("Content-Length")
        .and_then(|value| value.trim().parse::<u64>().ok());
    if let Some(length) = declared.filter(|&length| length > max_bytes as u64) {
        return Err(over_cap(format!(
            "server announced {length} bytes, cap is {max_bytes}"
        )));
    }
    let mut body = Vec::new();
    response
        .into_reader()
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut body)?;
    if body.len() > max_bytes {
        return Err(over_cap(format!("body ran past the {max_bytes} byte cap")));
    }
    Ok(body)
}

/// Connection failures, throttling (429), and 5xx responses are worth
/// another attempt; other statuses will not change on retry.
pub(crate) fn is_transient(error: &ureq::Error) -> bool {
    match error {
        ureq::Error::Transport(_) => true,
        ureq::Error::Status(code, _) => *code == 429 || *code >= 500,
    }
}

fn over_cap(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
