pub mod day_routine;
pub mod event;
pub mod person;
pub mod routine_template;

pub use day_routine::DayRoutine;
pub use event::Event;
pub use person::Person;
pub use routine_template::RoutineTemplate;
