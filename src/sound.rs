//! Sound facade
//!
//! Thin pass-through over the audio service: track which clip is loaded and
//! whether it is playing or looping, and hand the actual playback off at
//! the process boundary. Audio decoding and output devices are outside this
//! core, so the facade logs what it asks for.

/// Clip table. Index 0 is the background theme, the rest are effects.
const CLIPS: [&str; 4] = ["theme", "door", "pickup", "hit"];

pub struct Sound {
    /// Channel label used in log output ("music" or "effects").
    channel: &'static str,
    current: Option<usize>,
    playing: bool,
    looping: bool,
}

impl Sound {
    pub fn new(channel: &'static str) -> Self {
        Sound {
            channel,
            current: None,
            playing: false,
            looping: false,
        }
    }

    /// Select a clip by index. Unknown indices are logged and ignored.
    pub fn set_file(&mut self, index: usize) {
        if index >= CLIPS.len() {
            log::warn!("{}: no clip at index {}", self.channel, index);
            return;
        }
        self.current = Some(index);
        self.playing = false;
        self.looping = false;
    }

    pub fn play(&mut self) {
        match self.current {
            Some(index) => {
                self.playing = true;
                log::debug!("{}: play '{}'", self.channel, CLIPS[index]);
            }
            None => log::warn!("{}: play requested with no clip loaded", self.channel),
        }
    }

    /// Keep the current clip repeating until stopped.
    pub fn loop_playback(&mut self) {
        if self.playing {
            self.looping = true;
        }
    }

    pub fn stop(&mut self) {
        if self.playing {
            if let Some(index) = self.current {
                log::debug!("{}: stop '{}'", self.channel, CLIPS[index]);
            }
        }
        self.playing = false;
        self.looping = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}
