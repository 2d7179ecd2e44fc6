//! Logging shims: route the driver's log statements to `defmt` or `log`
//! depending on the enabled feature, or compile them out entirely.

#[cfg(all(feature = "defmt-log", feature = "log"))]
compile_error!("Enable at most one of the `defmt-log` and `log` features");

#[cfg(feature = "defmt-log")]
macro_rules! info {
    ($($arg:tt)+) => {
        ::defmt::info!($($arg)+)
    };
}

#[cfg(all(feature = "log", not(feature = "defmt-log")))]
macro_rules! info {
    ($($arg:tt)+) => {
        ::log::info!($($arg)+)
    };
}

#[cfg(not(any(feature = "defmt-log", feature = "log")))]
macro_rules! info {
    ($s:literal $(, $arg:expr)* $(,)?) => {
        { $(let _ = &$arg;)* }
    };
}

#[cfg(feature = "defmt-log")]
macro_rules! warn {
    ($($arg:tt)+) => {
        ::defmt::warn!($($arg)+)
    };
}

#[cfg(all(feature = "log", not(feature = "defmt-log")))]
macro_rules! warn {
    ($($arg:tt)+) => {
        ::log::warn!($($arg)+)
    };
}

#[cfg(not(any(feature = "defmt-log", feature = "log")))]
macro_rules! warn {
    ($s:literal $(, $arg:expr)* $(,)?) => {
        { $(let _ = &$arg;)* }
    };
}

#[cfg(feature = "defmt-log")]
macro_rules! error {
    ($($arg:tt)+) => {
        ::defmt::error!($($arg)+)
    };
}

#[cfg(all(feature = "log", not(feature = "defmt-log")))]
macro_rules! error {
    ($($arg:tt)+) => {
        ::log::error!($($arg)+)
    };
}

#[cfg(not(any(feature = "defmt-log", feature = "log")))]
macro_rules! error {
    ($s:literal $(, $arg:expr)* $(,)?) => {
        { $(let _ = &$arg;)* }
    };
}
