mod engine;

pub use engine::{Session, SessionEngine, SessionSnapshot};
