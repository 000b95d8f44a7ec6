pub mod ids;
pub mod timer;
