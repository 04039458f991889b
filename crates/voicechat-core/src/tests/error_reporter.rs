use crate::{ChatError, ErrorReporter};

use std::panic::Location;

use error_location::ErrorLocation;

fn no_audio() -> ChatError {
    ChatError::NoAudioCaptured {
        location: ErrorLocation::from(Location::caller()),
    }
}

/// WHAT: Undrained reports queue up until the receiver reads them
/// WHY: The channel is unbounded, so nothing is lost or blocks the controllers
#[test]
fn given_undrained_receiver_when_reporting_many_then_all_queued() {
    // Given: A reporter whose receiver is kept but not read
    let (errors, mut error_rx) = ErrorReporter::channel();

    // When: Reporting many errors
    for _ in 0..100 {
        errors.report(no_audio());
    }

    // Then: Every report is waiting on the receiver
    assert_eq!(error_rx.len(), 100);
    assert!(matches!(
        error_rx.try_recv(),
        Ok(ChatError::NoAudioCaptured { .. })
    ));
}

/// WHAT: Reporting after the receiver is dropped is silent
/// WHY: Dropping the receiver is how a host stops forwarding
#[test]
fn given_dropped_receiver_when_reporting_then_no_panic() {
    // Given: A reporter with its receiver dropped
    let (errors, error_rx) = ErrorReporter::channel();
    drop(error_rx);

    // When/Then: Reporting still returns normally
    errors.report(no_audio());
}
