pub(crate) mod curves;
pub(crate) mod encoding;
pub(crate) mod fields;
pub(crate) mod msm;
pub(crate) mod pairing;
#[macro_use]
pub(crate) mod macros;

/// Routes `tracing` output of the code under test to the test harness.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
