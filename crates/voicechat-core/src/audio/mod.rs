pub(crate) mod capture;
mod library;
pub(crate) mod player;
mod resampler;

pub(crate) use resampler::Resampler;

pub use {
    capture::CpalCapture,
    library::{ClipLibrary, RecordedClip},
    player::{CpalPlayback, CpalPlayer},
};
