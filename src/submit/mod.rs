//! Submit side effects performed after the form accepts a submit

mod notice;
mod traits;

pub use notice::NoticeSubmitHandler;
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
