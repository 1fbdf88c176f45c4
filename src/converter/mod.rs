pub mod picker;
pub mod state;


pub use picker::*;
pub use state::*;
