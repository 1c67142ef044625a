//! EV trip planner server.
//!
//! A web application that answers: "how do I get there in my electric car,
//! and where can I charge on the way?"

pub mod config;
pub mod domain;
pub mod google;
pub mod ocm;
pub mod planner;
pub mod session;
pub mod sources;
pub mod web;

#[cfg(test)]
mod mock;
