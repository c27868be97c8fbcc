// End-to-end tests for the Piper TTS Backend API
//
// Each test gets its own temp directory holding a models dir, an output dir
// and a stub `piper` shell script that records how it was invoked. The real
// router is served on an ephemeral port and driven over HTTP.
//
// Tests that exec the stub are serialised: a script that another thread is
// still writing cannot be executed (ETXTBSY).
