// Voice I/O — recognition session plus platform speech delegation.
//
// The session enforces the single-flight state machine; the transcriber
// and speaker traits delegate the actual audio work to platform
// services. Voice settings travel with each call — there is no
// process-wide voice state.

pub mod session;
pub mod synthesis;
pub mod transcribe;
