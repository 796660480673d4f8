//! Controller result codes

use std::fmt;

/// Outcome of a single login attempt as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Credentials accepted and the current user recorded.
    Ok,
    /// Credentials rejected.
    Ko,
    /// No form, or the service failed while checking it.
    Error,
}

impl ResultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCode::Ok => "OK",
            ResultCode::Ko => "KO",
            ResultCode::Error => "ERROR",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
