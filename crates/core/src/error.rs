//! Tracking error model.

use thiserror::Error;

/// Result type used across the tracking layer.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Coarse classification of a [`TrackingError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Something the hook looked for was absent (registry, event, attribute).
    NotFound,
    /// Text carried by an event or message was malformed.
    Parse,
}

/// Tracking-level error.
///
/// Every variant is an expected outcome of normal operation: most addresses are
/// not registered names, and event logs are produced by other modules. Hooks
/// absorb these errors; they never reach the host transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackingError {
    /// The address has no reverse-resolve entry, or the entry points at a missing registry.
    #[error("registry not found for {0}")]
    RegistryNotFound(String),

    /// No event of the requested type was emitted.
    #[error("event `{0}` not found")]
    EventNotFound(String),

    /// The event exists but does not carry the requested attribute.
    #[error("attribute `{key}` not found in event `{event}`")]
    AttributeNotFound { event: String, key: String },

    /// Malformed `<integer><denom>` / `<decimal><denom>` text.
    #[error("invalid coin: {0}")]
    InvalidCoin(String),

    /// Malformed fixed-point decimal text.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Denomination outside `[a-z][a-z0-9]{2,15}`.
    #[error("invalid denom: {0}")]
    InvalidDenom(String),

    /// Address text that is not canonical bech32 for the expected prefix.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Name text outside the `label.label[.label]` grammar.
    #[error("invalid name: {0}")]
    InvalidName(String),
}

impl TrackingError {
    pub fn registry_not_found(who: impl Into<String>) -> Self {
        Self::RegistryNotFound(who.into())
    }

    pub fn event_not_found(event_type: impl Into<String>) -> Self {
        Self::EventNotFound(event_type.into())
    }

    pub fn attribute_not_found(event: impl Into<String>, key: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            event: event.into(),
            key: key.into(),
        }
    }

    pub fn invalid_coin(msg: impl Into<String>) -> Self {
        Self::InvalidCoin(msg.into())
    }

    pub fn invalid_decimal(msg: impl Into<String>) -> Self {
        Self::InvalidDecimal(msg.into())
    }

    pub fn invalid_denom(msg: impl Into<String>) -> Self {
        Self::InvalidDenom(msg.into())
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RegistryNotFound(_) | Self::EventNotFound(_) | Self::AttributeNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::InvalidCoin(_)
            | Self::InvalidDecimal(_)
            | Self::InvalidDenom(_)
            | Self::InvalidAddress(_)
            | Self::InvalidName(_) => ErrorKind::Parse,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
