//! rosterdesk - student records dashboard
//!
//! Validates student forms, computes roster statistics, and lists, searches,
//! and sorts students held in an external record store behind a sign-in
//! gate.

pub mod auth;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod http_server;
pub mod observability;
pub mod roster;
pub mod store;
pub mod student;
