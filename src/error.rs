use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lower endpoint follows the upper endpoint.
    #[error("lower bound is greater than upper bound in range")]
    InvalidOrdering,

    /// A bounds tag outside of the four recognized configurations.
    #[error("bounds {0:#b} not recognized in range")]
    InvalidBounds(u8),

    /// The range literal is malformed or an endpoint is not a valid date-time.
    #[error("error parsing time range {literal:?}")]
    Parse {
        literal: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

impl Error {
    pub(crate) fn parse<S>(literal: S, source: Option<chrono::ParseError>) -> Self
    where
        S: Into<String>,
    {
        Error::Parse {
            literal: literal.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
