pub mod decode;
pub mod protocol;
pub mod stream;

// Re-exports for convenience
pub use decode::decode;
pub use protocol::OutgoingMessage;
pub use stream::Mode;
