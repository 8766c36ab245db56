pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::WordGridError;
pub use input::InputState;
pub use result::WordGridResult;
pub use traits::KeyValueStore;
