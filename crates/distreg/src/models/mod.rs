mod forms;

pub use forms::{AnswersForm, RegistrationForm};
