pub mod client;
pub mod project;

pub use client::{Client, NewClient};
pub use project::{NewProject, Project, ProjectChanges, ProjectStatus};
