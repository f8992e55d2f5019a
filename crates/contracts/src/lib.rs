//! Wire contracts shared between the console frontend and the wager backend.
//!
//! - `enums`: closed vocabularies (pana families)
//! - `shared`: request envelope and field validation rules
//! - `usecases`: one module per submission page (`u601`..`u604`)

pub mod enums;
pub mod shared;
pub mod usecases;
