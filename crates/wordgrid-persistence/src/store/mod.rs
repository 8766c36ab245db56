pub mod atomic_writer;
pub mod json_file_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use json_file_store::{JsonFileStore, StoreFile};
pub use memory_store::MemoryStore;
