// Domain layer: person records, statistics and the ports the engine talks through.

pub mod model;
pub mod ports;
