// Domain layer: function-shape contracts and the transient values the demonstrations use.

pub mod functions;
pub mod model;
