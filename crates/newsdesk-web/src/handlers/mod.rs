//! HTTP handlers for the dashboard

pub mod health;
pub mod pages;
pub mod session;
