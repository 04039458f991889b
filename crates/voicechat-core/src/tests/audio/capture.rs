use crate::{
    CaptureConfig, CaptureDevice, ChatError, ClipLibrary, CpalCapture,
    audio::capture::{MAX_BUFFER_SAMPLES, push_frames},
};

use std::{collections::VecDeque, time::Duration};

/// WHAT: Interleaved stereo frames are averaged into mono samples
/// WHY: Clips are stored mono whatever the input channel count
#[test]
fn given_stereo_frames_when_pushing_then_downmixed_to_mono() {
    // Given: An empty buffer and two stereo frames
    let mut buf = VecDeque::new();
    let data = [1.0f32, 0.0, 0.5, -0.5];

    // When: Pushing them as two-channel input
    let dropped = push_frames(&mut buf, &data, 2);

    // Then: One mono sample per frame, nothing dropped
    assert!(!dropped);
    assert_eq!(buf, VecDeque::from(vec![0.5f32, 0.0]));
}

/// WHAT: Mono input is appended unchanged
/// WHY: Single-channel devices must not be averaged away
#[test]
fn given_mono_frames_when_pushing_then_appended_as_is() {
    // Given: A buffer that already holds audio
    let mut buf = VecDeque::from(vec![0.25f32]);

    // When: Pushing mono input
    let dropped = push_frames(&mut buf, &[0.1, 0.2], 1);

    // Then: Appended in order after the existing sample
    assert!(!dropped);
    assert_eq!(buf, VecDeque::from(vec![0.25f32, 0.1, 0.2]));
}

/// WHAT: A full buffer drops its oldest samples and reports it
/// WHY: Long recordings stay bounded and the caller can log the trim
#[test]
fn given_full_buffer_when_pushing_stereo_then_oldest_discarded() {
    // Given: A buffer at max capacity filled with 0.0
    let mut buf = VecDeque::with_capacity(MAX_BUFFER_SAMPLES);
    buf.extend(std::iter::repeat_n(0.0f32, MAX_BUFFER_SAMPLES));

    // When: Pushing 1024 stereo frames of value 1.0
    let data = vec![1.0f32; 2048];
    let dropped = push_frames(&mut buf, &data, 2);

    // Then: Size capped, trim reported, newest 1024 samples kept
    assert!(dropped);
    assert_eq!(buf.len(), MAX_BUFFER_SAMPLES);
    assert!((buf[MAX_BUFFER_SAMPLES - 1] - 1.0).abs() < f32::EPSILON);
    assert!((buf[MAX_BUFFER_SAMPLES - 1024] - 1.0).abs() < f32::EPSILON);
    assert!(buf[MAX_BUFFER_SAMPLES - 1025].abs() < f32::EPSILON);
}

/// WHAT: Starting an uninitialized device fails
/// WHY: init must run at mount before any recording
#[tokio::test]
async fn given_uninitialized_capture_when_starting_then_device_error() {
    // Given: A capture device that was never initialized
    let mut capture = CpalCapture::new(ClipLibrary::default());

    // When: Starting
    let result = capture.start().await;

    // Then: A device error, nothing stored
    assert!(matches!(result, Err(ChatError::DeviceError { .. })));
}

/// WHAT: Stopping without a start fails
/// WHY: There is no clip to hand back
#[tokio::test]
async fn given_idle_capture_when_stopping_then_error() {
    // Given: A capture device that never started
    let library = ClipLibrary::default();
    let mut capture = CpalCapture::new(library.clone());

    // When: Stopping
    let result = capture.stop().await;

    // Then: Error and the library stays empty
    assert!(result.is_err());
    assert!(library.is_empty());
}

/// WHAT: A real recording lands in the library
/// WHY: End-to-end check of the cpal input path
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)] // Requires a microphone
#[allow(clippy::unwrap_used)]
async fn given_default_microphone_when_recording_then_clip_stored() {
    // Given: An initialized capture device
    let library = ClipLibrary::default();
    let mut capture = CpalCapture::new(library.clone());
    capture.init(&CaptureConfig::default()).unwrap();

    // When: Recording for half a second
    let started = capture.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    let stopped = capture.stop().await.unwrap();

    // Then: The same reference was stored with audio
    assert_eq!(started, stopped);
    assert!(library.get(&stopped).unwrap().duration() > Duration::ZERO);
}
