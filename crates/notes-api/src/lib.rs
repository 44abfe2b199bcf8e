//! # Notes API
//! 
//! HTTP handlers, authentication middleware, DTOs and the router.

pub mod handlers;
pub mod middleware;
pub mod dto;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{build_router, with_cors};
pub use state::AppState;
