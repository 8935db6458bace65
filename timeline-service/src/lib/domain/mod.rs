pub mod follow;
pub mod tweet;
pub mod user;
