pub mod dump;
pub mod types;

pub use dump::{find_dumps, load_dump, load_issues};
pub use types::{Assignee, Issue, Label, ReactionGroup, ReactionUsers};
