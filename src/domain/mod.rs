// Domain layer: the directory model and the console port. No I/O here.

pub mod model;
pub mod ports;
