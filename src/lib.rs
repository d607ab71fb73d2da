pub mod app;
pub mod config;
pub mod dto;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod storage;
pub mod uploads;
