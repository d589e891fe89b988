pub mod admin;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod poller;
pub mod routes;
