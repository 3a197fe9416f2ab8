// Domain layer: statistics values, errors and storage ports.

pub mod entities;
pub mod errors;
pub mod ports;
