use stepwise_solvers::integrate;

use crate::{ConfigError, Method};

/// Errors that can occur while running or reporting a comparison.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{method} integration failed: {source}")]
    Integrate {
        method: Method,
        #[source]
        source: integrate::Error,
    },

    #[error("exact solution is not finite at x = {x}")]
    Exact { x: f64 },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn integrate(method: Method) -> impl FnOnce(integrate::Error) -> Self {
        move |source| Self::Integrate { method, source }
    }
}
