// Domain layer: menu model, demo settings and the Demo port. std only.

pub mod model;
pub mod ports;
