mod issue;
mod session;

pub use issue::InMemoryIssueRepository;
pub use session::FileSessionStore;
