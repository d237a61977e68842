use crate::camera::Camera;
use crate::error::Error;
use crate::event::CameraEvent;
use crate::wait::EventSource;
use crate::{Flow, Result};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;



const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(2);
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// How long each native wait may block. This bounds how long a stop
    /// request can go unnoticed.
    pub poll_timeout: Duration,
    /// Pause after a failed wait before trying again.
    pub retry_delay: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { poll_timeout: DEFAULT_POLL_TIMEOUT, retry_delay: DEFAULT_RETRY_DELAY }
    }
}

impl MonitorConfig {
    #[must_use]
    pub fn with_poll_timeout(mut self, poll_timeout: Duration) -> Self {
        self.poll_timeout = poll_timeout;
        self
    }

    #[must_use]
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
}



pub trait EventHandler: FnMut(CameraEvent) -> Flow {}

impl<T> EventHandler for T where T: FnMut(CameraEvent) -> Flow {}

impl<S: EventSource> Camera<S> {
    /// Poll for events until `stop` is set or `handler` returns
    /// [`Flow::Break`], and return how many events were handled.
    ///
    /// libgphoto2 can't cancel a wait in progress, so `stop` is only looked at
    /// between waits of at most `config.poll_timeout`. Native failures are
    /// logged and retried after `config.retry_delay`; a disconnected camera
    /// ends the loop with an error.
    pub fn monitor<F: EventHandler>(
        &mut self,
        config: &MonitorConfig,
        stop: &AtomicBool,
        mut handler: F,
    ) -> Result<usize> {
        let mut count = 0;

        while !stop.load(Ordering::Relaxed) {
            match self.wait_for_event_timeout(config.poll_timeout) {
                Ok(None) => continue,
                Ok(Some(event)) => {
                    count += 1;

                    if handler(event) == Flow::Break { break; }
                }
                Err(e @ Error::Native(_)) => {
                    warn!("error waiting for camera event, retrying: {e}");
                    thread::sleep(config.retry_delay);
                }
                Err(e) => return Err(e)
            }
        }

        info!("event monitor stopped after {count} event(s)");

        Ok(count)
    }
}
