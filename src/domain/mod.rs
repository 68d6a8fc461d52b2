// Domain layer: data model and ports. Concrete adapters live under `adapters`.

pub mod model;
pub mod ports;
