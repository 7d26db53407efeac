//! Client-side session: the auth API seam, token storage, the session context
//! and the page guard.

mod client;
mod guards;
mod state;
mod storage;
pub mod types;

pub use client::{AuthApi, ProxyClient};
pub use guards::{require_auth, Guarded};
pub use state::AuthContext;
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
