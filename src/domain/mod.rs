// Domain layer: standings models, the ports the pipeline is built against and the built-in sample.

pub mod model;
pub mod ports;
pub mod sample;
