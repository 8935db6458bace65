//! Timeline service library
//!
//! Minimal social networking backend: account registration and login,
//! posting tweets, following other users, and reading, searching, and
//! paginating a timeline of followed users' tweets.
//!
//! Organized hexagonally:
//! - `domain` holds the models, ports, and services
//! - `inbound` adapts HTTP requests onto the domain
//! - `outbound` adapts the domain onto PostgreSQL

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
