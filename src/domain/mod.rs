// Domain layer: models, ports and the pure feeding/chat/reminder services.

pub mod model;
pub mod ports;
pub mod services;
