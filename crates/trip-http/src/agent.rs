use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;

pub(crate) const USER_AGENT: &str = concat!("drive-sim/", env!("CARGO_PKG_VERSION"));

/// Largest reply body decoded; anything past it is cut off and fails to parse.
pub(crate) const MAX_REPLY_BYTES: u64 = 1024 * 1024;

/// A blocking agent whose connect, read and write phases each time out
/// after `timeout`.
pub(crate) fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .timeout_write(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// One-line description of a failed call, without the response body.
pub(crate) fn describe(service: &str, err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(status, _) => format!("{service} returned HTTP {status}"),
        ureq::Error::Transport(transport) => {
            format!("{service} unreachable ({:?}): {transport}", transport.kind())
        }
    }
}

/// Decode a JSON reply, reading at most [`MAX_REPLY_BYTES`].
pub(crate) fn read_json<T: DeserializeOwned>(body: impl Read) -> serde_json::Result<T> {
    serde_json::from_reader(body.take(MAX_REPLY_BYTES))
}
