/// Adapter implementations of the port traits
///
/// Each adapter wraps one external capability behind its port.
pub mod services;
