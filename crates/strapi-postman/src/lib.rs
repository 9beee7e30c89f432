//! strapi-postman - Postman collection generator for Strapi projects
//!
//! Command-line layer over `strapi-postman-core`: argument parsing, logging
//! setup and exit codes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
