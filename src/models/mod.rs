pub mod advisory;
pub mod ai_response;
pub mod forecast;
pub mod location;

pub use advisory::*;
pub use ai_response::*;
pub use forecast::*;
pub use location::*;
