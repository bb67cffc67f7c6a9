// Services
// Collaborator seams and configuration: sharing and settings.

pub mod settings_engine;
pub mod share;
