pub mod api_docs;
pub mod app;
pub mod bootstrap;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod ranking;
pub mod repositories;
pub mod response;
pub mod routes;
pub mod static_service;
pub mod utils;
