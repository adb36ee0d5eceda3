pub mod renderer;
pub mod traits;
pub mod components;
pub mod renders;

pub use renderer::*;
pub use traits::*;
pub use components::*;
pub use renders::*;
