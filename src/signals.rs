//! Graceful shutdown on hangup, interrupt and terminate.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;

/// Exit status when the wait was cut short by a signal.
pub const SIGNAL_EXIT_CODE: u8 = 128;

/// Spawns a watcher thread for SIGHUP, SIGINT and SIGTERM. On the first
/// signal it prints which one arrived and raises the stop flag; the main
/// path notices the flag and exits, so the watcher never terminates the
/// process itself.
pub fn watch(stop: Arc<AtomicBool>) -> io::Result<()> {
    let mut signals = Signals::new([SIGHUP, SIGINT, SIGTERM])?;
    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            // leading newline steps off the countdown line
            eprintln!("\n\t{}", message_for(signal));
            stop.store(true, Ordering::Relaxed);
        }
    });
    Ok(())
}

fn message_for(signal: i32) -> String {
    match signal {
        SIGHUP => "process kill -HUP received".to_string(),
        SIGINT => "process aborted on your request, ctrl-c received".to_string(),
        SIGTERM => "process kill -TERM received".to_string(),
        other => format!("process aborted due to received signal: {other}"),
    }
}

#[test]
fn test_signal_messages_are_distinct() {
    let messages = [
        message_for(SIGHUP),
        message_for(SIGINT),
        message_for(SIGTERM),
    ];
    assert!(messages[0].contains("HUP"));
    assert!(messages[1].contains("ctrl-c"));
    assert!(messages[2].contains("TERM"));
}

#[test]
fn test_unknown_signal_names_the_number() {
    assert!(message_for(42).contains("42"));
}
