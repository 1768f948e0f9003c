// Domain layer: result records, errors and ports.

pub mod entities;
pub mod errors;
pub mod ports;
