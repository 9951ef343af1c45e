//! HTTP layer: the default handler and the middleware that resolves
//! redirects in front of it.

pub mod handlers;
pub mod middleware;
