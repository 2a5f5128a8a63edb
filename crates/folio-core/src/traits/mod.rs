//! Ports the stores depend on

mod api;

pub use api::{ContactApi, PortfolioApi, ProfileApi, ProjectApi, SkillApi};
