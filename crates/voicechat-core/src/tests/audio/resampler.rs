use crate::audio::Resampler;

const CAPTURE_RATE: u32 = 44_100;
const OUTPUT_RATE: u32 = 48_000;
const TEST_SIGNAL_AMPLITUDE: f32 = 0.5;
const MAX_AMPLITUDE: f32 = 1.5;

/// Allowed length deviation: 5% of the expected length, for FFT delay and padding.
fn tolerance(expected: u64) -> u64 {
    expected / 20
}

/// WHAT: Upsampling a one-second clip yields about one second at the output rate
/// WHY: Clips captured at 44.1kHz must play at normal speed on a 48kHz device
#[test]
#[allow(clippy::unwrap_used)]
fn given_44khz_clip_when_resampling_to_48khz_then_length_scales() {
    // Given: Resampler for 44.1kHz -> 48kHz and one second of signal
    let mut resampler = Resampler::new(CAPTURE_RATE, OUTPUT_RATE).unwrap();
    let input = vec![TEST_SIGNAL_AMPLITUDE; CAPTURE_RATE as usize];

    // When: Resampling
    let output = resampler.resample(&input).unwrap();

    // Then: About one second at 48kHz, all finite
    assert!(
        (output.len() as i64 - OUTPUT_RATE as i64).unsigned_abs() < tolerance(OUTPUT_RATE as u64),
        "Expected ~{} samples, got {}",
        OUTPUT_RATE,
        output.len()
    );
    assert!(output.iter().all(|&s| s.is_finite()));
}

/// WHAT: Empty clips resample to empty output
/// WHY: Edge case handling for zero-length input
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_clip_when_resampling_then_empty_output() {
    // Given: Resampler and no samples
    let mut resampler = Resampler::new(CAPTURE_RATE, OUTPUT_RATE).unwrap();

    // When: Resampling nothing
    let output = resampler.resample(&[]).unwrap();

    // Then: Nothing comes out
    assert!(output.is_empty());
}

/// WHAT: Downsampling a tone keeps it bounded and finite
/// WHY: Clips captured at 48kHz may play on a 44.1kHz device
#[test]
#[allow(clippy::unwrap_used)]
fn given_tone_when_downsampling_then_output_bounded() {
    // Given: Resampler for 48kHz -> 44.1kHz and a short tone
    let mut resampler = Resampler::new(OUTPUT_RATE, CAPTURE_RATE).unwrap();
    let input: Vec<f32> = (0..4800).map(|i| (i as f32 * 0.1).sin()).collect();

    // When: Resampling
    let output = resampler.resample(&input).unwrap();

    // Then: Length scaled by 44.1/48 and samples stay in range
    assert!((output.len() as i64 - 4410).unsigned_abs() < tolerance(4410));
    assert!(
        output
            .iter()
            .all(|&s| s.is_finite() && s.abs() <= MAX_AMPLITUDE)
    );
}
