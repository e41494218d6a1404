// Neonfolio contact form - error types
//
// Everything that can stop a submission. Transport failures are isolated:
// they land in the form's status instead of propagating further.

use std::fmt;

use neonfolio_utils::contact::FieldProblem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Required fields missing or malformed
    Validation(Vec<FieldProblem>),

    /// A submission is already in flight
    AlreadySending,

    /// The transport gave up
    Transport(String),

    /// The form was torn down mid-submission
    ShutdownRequested,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(problems) => {
                let problems: Vec<String> = problems.iter().map(ToString::to_string).collect();
                write!(f, "Invalid form: {}", problems.join("; "))
            },
            Self::AlreadySending => write!(f, "A message is already being sent"),
            Self::Transport(msg) => write!(f, "Failed to send message: {}", msg),
            Self::ShutdownRequested => write!(f, "Shutdown requested"),
        }
    }
}

impl std::error::Error for ContactError {}

pub type ContactResult<T> = Result<T, ContactError>;
