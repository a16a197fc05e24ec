pub mod auth;
pub mod best_scores;
pub mod health;
pub mod history;
pub mod home;
pub mod proxy;
pub mod workout;
