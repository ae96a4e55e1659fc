// Request and response envelopes, one pair per endpoint. Responses that can
// return either a single resource or the whole collection carry both a
// singular and a plural field; which one is populated depends on which
// facade method was called.

pub mod application;
pub mod email;
pub mod jwt;
pub mod login;
pub mod report;
pub mod system;
pub mod user;

pub use application::*;
pub use email::*;
pub use jwt::*;
pub use login::*;
pub use report::*;
pub use system::*;
pub use user::*;
