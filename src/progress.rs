//! Single-line countdown display for the post-send wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(200);
// the remaining-seconds display only moves every fifth tick, so it counts
// whole seconds while the stop flag is still polled at tick granularity
const TICKS_PER_COUNT: u32 = 5;

/// How the remaining wait is drawn. Both strategies count down the same way;
/// only the rendering differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Remaining whole seconds, e.g. `sleeping for 20 seconds: [17]`.
    Counter,
    /// A turning cursor next to the message.
    Spinner,
}

/// Counts down from a number of seconds to zero on its own thread, clearing
/// the display line when done or when the stop flag is raised.
pub struct Countdown {
    seconds: u64,
    message: String,
    render: Render,
}

impl Countdown {
    pub fn new(seconds: u64) -> Self {
        Countdown {
            seconds,
            message: String::new(),
            render: Render::Counter,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn render(mut self, render: Render) -> Self {
        self.render = render;
        self
    }

    /// Spawns the countdown thread. The caller keeps the other end of the
    /// stop flag; raising it ends the countdown within one tick.
    pub fn start(self, stop: Arc<AtomicBool>) -> JoinHandle<()> {
        thread::spawn(move || self.tick_down(&stop))
    }

    fn bar(&self) -> ProgressBar {
        match self.render {
            Render::Counter => {
                let bar = ProgressBar::new(self.seconds);
                bar.set_style(
                    ProgressStyle::with_template("{msg}: [{pos:.magenta}]").unwrap(),
                );
                bar
            }
            Render::Spinner => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(
                    ProgressStyle::with_template("{msg}...\t{spinner:.magenta}")
                        .unwrap()
                        .tick_strings(&["‒", "\\", "|", "/", " "]),
                );
                bar
            }
        }
    }

    fn tick_down(self, stop: &AtomicBool) {
        let bar = self.bar();
        bar.set_message(self.message.clone());
        bar.set_position(self.seconds);

        let mut remaining = self.seconds;
        'counting: while remaining > 0 {
            for _ in 0..TICKS_PER_COUNT {
                if stop.load(Ordering::Relaxed) {
                    break 'counting;
                }
                thread::sleep(TICK);
                bar.tick();
            }
            remaining -= 1;
            bar.set_position(remaining);
        }

        bar.finish_and_clear();
    }
}

#[test]
fn test_countdown_zero_returns_immediately() {
    let started = std::time::Instant::now();
    let handle = Countdown::new(0).start(Arc::new(AtomicBool::new(false)));
    handle.join().unwrap();
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_countdown_stops_within_a_tick() {
    let stop = Arc::new(AtomicBool::new(true));
    let started = std::time::Instant::now();
    let handle = Countdown::new(60)
        .message("sleeping for 60 seconds")
        .start(Arc::clone(&stop));
    handle.join().unwrap();
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_countdown_spinner_stops_too() {
    let stop = Arc::new(AtomicBool::new(true));
    let started = std::time::Instant::now();
    let handle = Countdown::new(60).render(Render::Spinner).start(stop);
    handle.join().unwrap();
    assert!(started.elapsed() < Duration::from_secs(1));
}
