// Domain layer: the language set and the capability ports. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
