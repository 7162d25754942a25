pub mod daily;
pub mod health;
pub mod scheduler;
pub mod verses;
