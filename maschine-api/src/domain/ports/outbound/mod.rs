mod user_search;

pub use user_search::*;
