pub mod controller;
pub mod event_loop;
pub mod events;

pub use controller::TranslationController;
pub use event_loop::event_loop;
pub use events::ControllerEvent;

#[cfg(test)]
mod tests;
