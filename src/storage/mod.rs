pub mod memory;

pub use memory::MovieStore;
