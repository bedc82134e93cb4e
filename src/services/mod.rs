pub mod layout;
pub mod paper_service;
pub mod question_renderer;

pub use paper_service::generate_paper;
pub use question_renderer::render_question;
