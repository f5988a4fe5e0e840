pub mod clock;
pub mod machine;
pub mod scheduler;
