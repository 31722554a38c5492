// Domain layer: catalogs, models and ports. No I/O.

pub mod catalog;
pub mod model;
pub mod ports;
