// Domain layer: records, filters and the transport port. No HTTP here.

pub mod model;
pub mod ports;
