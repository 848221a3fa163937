//! Événements `tracing` internes, compilés uniquement avec la feature `logging`.

macro_rules! plan_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! plan_info {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::info!($($arg)*);
    };
}

macro_rules! plan_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        tracing::warn!($($arg)*);
    };
}
