// ABOUTME: Errors returned by cluster API calls.
// ABOUTME: Keeps the server's structured status payload for policy decisions.

/// Errors from create and delete calls against the cluster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    /// The API server answered with a failure status.
    #[error("API error {code} ({reason}): {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },

    /// The server answered but the client could not decode the reply.
    #[error("unparsable response from API server: {0}")]
    UnparsableResponse(String),

    /// A namespaced object was addressed without a namespace.
    #[error("{0} has no namespace")]
    MissingNamespace(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl ClusterError {
    pub fn api(code: u16, reason: impl Into<String>, message: impl Into<String>) -> Self {
        ClusterError::Api {
            code,
            reason: reason.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<u16> {
        match self {
            ClusterError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.code() == Some(409)
    }
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(ae) => ClusterError::Api {
                code: ae.code,
                reason: ae.reason,
                message: ae.message,
            },
            kube::Error::SerdeError(e) => ClusterError::UnparsableResponse(e.to_string()),
            other => ClusterError::Transport(other.to_string()),
        }
    }
}
