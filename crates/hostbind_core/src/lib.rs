//! Marshaling between loosely typed host values and statically described types.

/// Operation registry, argument access and host reply envelopes.
pub mod dispatch;
/// Dynamic values, type descriptors, and the inbound/outbound converters.
pub mod marshal;
