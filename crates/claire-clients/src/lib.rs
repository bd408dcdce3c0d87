//! claire-clients: messaging clients driven by the test suites.
//!
//! [`MessagingClient`] is the data-path contract every client implements.
//! [`BundledArtemisClient`] wraps the `artemis` launcher shipped with the
//! broker: it renders a [`CommandRequest`], runs it through the deployment's
//! executor and parses the captured text. It has no data path of its own, so
//! every [`MessagingClient`] operation on it fails with
//! [`ClientError::Unsupported`].

pub mod bundled;
pub mod command;
pub mod perf;

use claire_core::ParseError;
use claire_exec::ExecError;

pub use bundled::BundledArtemisClient;
pub use command::{CommandOptions, CommandRequest};
pub use perf::{acceptor_url, PerfScenario};

/// A message as recorded by a client.
pub type Message = serde_json::Value;

/// Data-path operations of a messaging client.
pub trait MessagingClient {
    fn send_messages(&mut self) -> Result<usize, ClientError>;

    fn receive_messages(&mut self) -> Result<usize, ClientError>;

    fn subscribe(&mut self) -> Result<(), ClientError>;

    fn unsubscribe(&mut self) -> Result<(), ClientError>;

    fn sent_messages(&self) -> Result<Vec<Message>, ClientError>;

    fn received_messages(&self) -> Result<Vec<Message>, ClientError>;

    /// Compare what this client sent with what it received.
    fn compare_messages(&self) -> Result<bool, ClientError>;

    fn compare_messages_with(&self, sent: &[Message], received: &[Message]) -> Result<bool, ClientError>;
}

/// Names a [`MessagingClient`] operation in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SendMessages,
    ReceiveMessages,
    Subscribe,
    Unsubscribe,
    SentMessages,
    ReceivedMessages,
    CompareMessages,
    CompareMessagesWith,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SendMessages => write!(f, "send_messages"),
            Operation::ReceiveMessages => write!(f, "receive_messages"),
            Operation::Subscribe => write!(f, "subscribe"),
            Operation::Unsubscribe => write!(f, "unsubscribe"),
            Operation::SentMessages => write!(f, "sent_messages"),
            Operation::ReceivedMessages => write!(f, "received_messages"),
            Operation::CompareMessages => write!(f, "compare_messages"),
            Operation::CompareMessagesWith => write!(f, "compare_messages_with"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("[{container}] {operation} not implemented yet")]
    Unsupported {
        container: String,
        operation: Operation,
    },
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Exec(ExecError::Timeout { .. }))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ClientError::Unsupported { .. })
    }
}
