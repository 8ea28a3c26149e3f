pub mod greeter;
pub mod login;
pub mod messages;

pub use crate::domain::model::Language;
pub use crate::domain::ports::{Dom, TextSink};
pub use crate::utils::error::Result;
