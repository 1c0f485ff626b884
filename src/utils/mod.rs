pub mod formatting;
pub mod seeding;
pub mod slug;
