use std::{fmt, sync::Arc};

/// Opaque identifier for a recorded audio clip.
///
/// Produced by the capture device and consumed by the playback engine. The
/// core never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipRef(Arc<str>);

impl ClipRef {
    /// Wrap a collaborator-provided identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The identifier as handed out by the capture device.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
