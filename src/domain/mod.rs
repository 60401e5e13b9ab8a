// Domain layer: report model and the greeter port. No external dependencies.

pub mod model;
pub mod ports;
