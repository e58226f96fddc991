pub mod leaderboard;
pub mod restroom;
pub mod review;
pub mod user;

pub use leaderboard::get_leaderboard_handler;
pub use restroom::{add_restroom_handler, get_restrooms_handler};
pub use review::{get_restroom_reviews_handler, submit_review_handler};
pub use user::{create_user_handler, get_user_handler};
