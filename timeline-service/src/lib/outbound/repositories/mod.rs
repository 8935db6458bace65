pub mod follow;
pub mod tweet;
pub mod user;

pub use follow::PostgresFollowRepository;
pub use tweet::PostgresTweetRepository;
pub use user::PostgresUserRepository;
