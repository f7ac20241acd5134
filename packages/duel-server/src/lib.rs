pub mod actions;
pub mod arena;
pub mod config;
pub mod hub;
pub mod routes;
pub mod state;
