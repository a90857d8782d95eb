//! API Layer
//!
//! The goals REST backend as seen from the client: an abstract trait, its HTTP
//! implementation, and the cookie session the browser carries.

mod traits;
mod http;
mod session;

pub use http::HttpGoalApi;
pub use session::{Session, ACCESS_TOKEN_COOKIE, USER_ID_COOKIE};
pub use traits::{GoalApi, GoalScope, PageQuery};
