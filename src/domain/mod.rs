// Domain layer: keyword models and the ports the job pipeline runs against.

pub mod model;
pub mod ports;
