//! Test helpers shared across the workspace.
//!
//! [`env`] serialises mutations of the properties override variable,
//! [`properties`] writes throwaway properties files and [`runtime`] provides
//! an in-memory BDD runtime to drive the runner against.

pub mod env;
pub mod properties;
pub mod runtime;
