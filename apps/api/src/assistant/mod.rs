pub mod intent;
pub mod responder;
pub mod selection;

pub use responder::{respond, AssistantReply};
pub use selection::{RandomSelection, SelectionStrategy, SkillOverlapSelection};
