// Domain layer: accessory models, the service classifier and the flattening logic.
// No I/O here.

pub mod accessory;
pub mod characteristic;
pub mod model;
pub mod ports;
pub mod service;
pub mod service_type;
