// Interface adapters: HTTP handlers, wire protocol and storage adapters.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
