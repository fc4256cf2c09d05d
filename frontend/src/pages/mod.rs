mod contest;
mod contests;
mod home;
mod outlet;
mod problem;
mod problems;
mod ranklist;
mod submission;
mod submissions;

pub use contest::ContestPage;
pub use contests::ContestList;
pub use home::Home;
pub use outlet::Pages;
pub use problem::ProblemSubmission;
pub use problems::ProblemList;
pub use ranklist::RankList;
pub use submission::SubmissionStatus;
pub use submissions::{JobTable, SubmissionList};
