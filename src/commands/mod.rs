/// Command handlers exposed to the outer surface
pub mod summary;
