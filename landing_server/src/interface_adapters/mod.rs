// Interface adapters: outbound client, HTML rendering and HTTP handlers.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod render;
pub mod routes;
pub mod state;
