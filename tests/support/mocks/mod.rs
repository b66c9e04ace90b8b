pub mod store;
pub mod time;

pub use store::FailingArticleStore;
pub use time::{FixedClock, fixed_now};
