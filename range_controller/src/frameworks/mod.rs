// Frameworks layer: configuration and the scan-loop host.

pub mod config;
pub mod runtime;
