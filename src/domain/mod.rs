// Domain layer: core models, ports and the static reference roster.

pub mod model;
pub mod ports;
pub mod roster;
