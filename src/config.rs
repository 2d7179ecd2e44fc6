/// Represents config for [`QwiicOpenLog`](crate::QwiicOpenLog).
pub trait OpenLogConfig {
    /// Per-transaction byte cap of the host's I2C engine.
    const I2C_BUFFER_LENGTH: usize;
    /// Report success even when a bus write transaction fails.
    ///
    /// Some I2C engines misreport the completion code of writes to this
    /// device; setting this reproduces the historical behavior of
    /// ignoring it. Reads are never affected.
    const IGNORE_SEND_ERRORS: bool;
}

/// Default implementation of [`OpenLogConfig`](crate::OpenLogConfig).
pub struct DefaultOpenLogConfig;

impl OpenLogConfig for DefaultOpenLogConfig {
    const I2C_BUFFER_LENGTH: usize = 32;
    const IGNORE_SEND_ERRORS: bool = false;
}
