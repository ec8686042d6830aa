//! rdm-deposit: helpers behind the metadata deposit form
//!
//! - [`domain::node`]: leaf traversal over nested mapping/sequence trees
//! - [`domain::category`]: singular/plural category labels with default fallback
//! - [`domain::entries`]: repeatable publication and project entries
//! - [`domain::options`]: select option sorting
//!
//! Layered architecture:
//! - `domain`: pure data and algorithms
//! - `application`: services (document loading) over I/O traits
//! - `infrastructure`: I/O implementations and wiring
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
