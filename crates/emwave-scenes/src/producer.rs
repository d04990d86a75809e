//! Frame producer: a background thread that renders scene frames and
//! feeds them to a consumer (typically the renderer) via a bounded channel.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{SendTimeoutError, Sender};

use crate::frame::WaveFrame;
use crate::source::FrameSource;

/// How long a blocked send waits before re-checking the stop flag.
const SEND_POLL: Duration = Duration::from_millis(20);

/// Background frame producer thread.
///
/// Continuously pulls frames from a `FrameSource` and sends them through
/// a crossbeam channel. A full channel blocks the producer, so a slow
/// consumer applies backpressure instead of frames piling up.
pub struct FrameProducer {
    running: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<usize>>,
}

impl FrameProducer {
    /// Start producing frames in a background thread.
    ///
    /// Runs until the source is exhausted, `stop()` is called, or the
    /// receiving side of `frame_tx` is dropped.
    pub fn start(mut source: impl FrameSource, frame_tx: Sender<WaveFrame>) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let thread = thread::Builder::new()
            .name("frame-producer".to_string())
            .spawn(move || {
                let mut sent = 0;
                'frames: while running_clone.load(Ordering::Relaxed) {
                    let Some(mut frame) = source.next_frame() else {
                        break;
                    };
                    loop {
                        match frame_tx.send_timeout(frame, SEND_POLL) {
                            Ok(()) => {
                                sent += 1;
                                break;
                            }
                            Err(SendTimeoutError::Timeout(pending)) => {
                                if !running_clone.load(Ordering::Relaxed) {
                                    break 'frames;
                                }
                                frame = pending;
                            }
                            Err(SendTimeoutError::Disconnected(_)) => break 'frames,
                        }
                    }
                }
                running_clone.store(false, Ordering::Relaxed);
                log::info!("Frame producer finished after {sent} frames");
                sent
            })?;

        Ok(Self {
            running,
            thread: Some(thread),
        })
    }

    /// Signal the producer to stop and wait for it to finish.
    ///
    /// Returns the number of frames delivered, or 0 if already stopped.
    pub fn stop(&mut self) -> usize {
        self.running.store(false, Ordering::Relaxed);
        match self.thread.take() {
            Some(thread) => thread.join().unwrap_or_else(|_| {
                log::error!("Frame producer thread panicked");
                0
            }),
            None => 0,
        }
    }

    /// Check if the producer is still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Drop for FrameProducer {
    fn drop(&mut self) {
        self.stop();
    }
}
