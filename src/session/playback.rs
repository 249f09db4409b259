use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared play/pause flag.
///
/// Clones observe the same flag, so an editor and any number of render sessions stay in step
/// without a central scheduler.
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    playing: Arc<AtomicBool>,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PlaybackClock {
    pub fn new(playing: bool) -> Self {
        Self {
            playing: Arc::new(AtomicBool::new(playing)),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Release);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        !self.playing.fetch_xor(true, Ordering::AcqRel)
    }
}
