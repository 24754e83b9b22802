//! team-manager — employee & weekly survey management service
//!
//! Small internal web app:
//! - Employee CRUD rendered as server-side HTML
//! - Weekly survey submission and review (left-joined with employees)
//! - Task list and canned recommendations as JSON helpers
//! - Optional single-user HTTP Basic auth backed by the users table

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod recommendations;
pub mod state;
pub mod util;
pub mod views;
