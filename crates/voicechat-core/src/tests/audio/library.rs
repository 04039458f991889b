use crate::{ClipLibrary, ClipRef, RecordedClip};

use std::time::Duration;

/// WHAT: Stored clips are found by reference from any clone of the library
/// WHY: Capture and playback share one library
#[test]
#[allow(clippy::unwrap_used)]
fn given_stored_clip_when_looked_up_from_clone_then_found() {
    // Given: A library and a clone of it
    let library = ClipLibrary::default();
    let shared = library.clone();
    let clip = ClipRef::new("clip-1");

    // When: Storing two seconds of 16kHz audio through one handle
    library.insert(clip.clone(), RecordedClip::new(vec![0.25; 32_000], 16_000));

    // Then: The other handle sees it with its rate and duration
    let recorded = shared.get(&clip).unwrap();
    assert_eq!(recorded.sample_rate(), 16_000);
    assert_eq!(recorded.samples().len(), 32_000);
    assert_eq!(recorded.duration(), Duration::from_secs(2));
    assert_eq!(shared.len(), 1);
}

/// WHAT: Unknown references are not found
/// WHY: The player reports ClipNotFound instead of playing silence
#[test]
fn given_empty_library_when_looking_up_then_none() {
    // Given: An empty library
    let library = ClipLibrary::default();

    // When/Then: Lookup misses
    assert!(library.is_empty());
    assert!(library.get(&ClipRef::new("clip-404")).is_none());
}

/// WHAT: A zero sample rate yields a zero duration
/// WHY: Duration must not divide by zero
#[test]
fn given_zero_rate_clip_when_measuring_then_zero_duration() {
    // Given/When/Then: Degenerate clip has no duration
    let recorded = RecordedClip::new(vec![0.0; 10], 0);
    assert_eq!(recorded.duration(), Duration::ZERO);
}
