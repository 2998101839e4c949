use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Unable to compile pattern '{pattern}'"))]
    PatternCompilation {
        pattern: String,
        source: regex::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
