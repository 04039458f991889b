use crate::audio::player::fill_output;

use std::sync::atomic::{AtomicUsize, Ordering};

/// WHAT: The clip is copied out in device-sized chunks, tail padded with silence
/// WHY: Each output callback receives the next slice of the clip
#[test]
fn given_clip_when_filling_buffers_then_copied_in_order_and_padded() {
    // Given: A six-sample clip and a four-sample device buffer
    let samples = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    let position = AtomicUsize::new(0);
    let mut data = [9.0f32; 4];

    // When: Filling the first buffer
    let finished = fill_output(&mut data, &samples, &position);

    // Then: The first four samples, not finished
    assert!(!finished);
    assert_eq!(data, [1.0, 2.0, 3.0, 4.0]);

    // When: Filling the second buffer
    let finished = fill_output(&mut data, &samples, &position);

    // Then: The tail plus silence, still not finished
    assert!(!finished);
    assert_eq!(data, [5.0, 6.0, 0.0, 0.0]);
    assert_eq!(position.load(Ordering::Relaxed), samples.len());
}

/// WHAT: Completion fires on the callback after the tail was handed out
/// WHY: The label must not flip back before the last samples are audible
#[test]
fn given_tail_already_written_when_filling_next_buffer_then_finished_with_silence() {
    // Given: A clip whose samples were all written last callback
    let samples = [1.0f32, 2.0, 3.0, 4.0];
    let position = AtomicUsize::new(0);
    let mut data = [0.0f32; 4];
    assert!(!fill_output(&mut data, &samples, &position));

    // When: The device asks for the next buffer
    let mut next = [7.0f32; 4];
    let finished = fill_output(&mut next, &samples, &position);

    // Then: Finished, and the buffer is silent
    assert!(finished);
    assert_eq!(next, [0.0; 4]);
}

/// WHAT: An empty clip finishes on the first callback
/// WHY: There is nothing to wait for
#[test]
fn given_empty_clip_when_filling_then_finished_immediately() {
    // Given: No samples
    let position = AtomicUsize::new(0);
    let mut data = [3.0f32; 2];

    // When: Filling a buffer
    let finished = fill_output(&mut data, &[], &position);

    // Then: Finished with silence
    assert!(finished);
    assert_eq!(data, [0.0; 2]);
}
