// Domain layer: scenario models and the ports the engine is written against.

pub mod model;
pub mod ports;
