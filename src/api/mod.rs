pub mod handlers;
pub mod server;

pub use handlers::{AppState, CostResponse};
pub use server::{router, run};
