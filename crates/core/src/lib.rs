pub mod clock;
pub mod use_case;

pub use crate::clock::{AppClock, AppTime, Clock};
pub use crate::use_case::UseCase;
pub use crate::use_case::UseCaseValidatable;
