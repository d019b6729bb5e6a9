pub mod answer;
pub mod render;
pub mod types;

pub use answer::{AnswerError, SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN};
pub use render::{RenderError, format_answer, normalize_answers, render_answers};
pub use types::{
    DEFAULT_HEADING, FieldType, PromptSettings, Question, QuestionStyle, UnknownFieldType,
};
