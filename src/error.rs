use std::io;

use thiserror::Error;

/// Everything that can go wrong in a single invocation. All of these are
/// terminal; the process reports the message and exits with status 1.
#[derive(Error, Debug)]
pub enum WakeError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(&'static str),

    #[error("given MAC address is invalid: {0}")]
    InvalidHardwareAddress(String),

    #[error("given IP address is invalid: {0}")]
    InvalidIpAddress(String),

    #[error("given hostname is not resolvable: {0}")]
    UnresolvableHostname(String),

    #[error("error sending the wake up signal: {0}")]
    SendFailure(#[source] io::Error),

    #[error("unable to install the signal handlers: {0}")]
    SignalSetup(#[source] io::Error),
}
