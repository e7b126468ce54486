//! Loading slab schedules from CSV.

mod loader;

pub use loader::{SlabLoadError, SlabRecord, SlabScheduleLoader};
