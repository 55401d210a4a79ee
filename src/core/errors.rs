//! Error types for the ticket recognition pipeline.
//!
//! One request maps to one terminal outcome: decode failures and recognizer
//! unavailability abort immediately, an all-strategies-failed recognition
//! pass surfaces as [`ScanError::NoTextDetected`], and everything the
//! pipeline can recover from locally (boundary detection, enhancement) is
//! logged and degraded instead of raised.

use thiserror::Error;

/// Stage of the pipeline an internal processing error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Ticket boundary detection and perspective rectification.
    Rectification,
    /// One of the image enhancement strategies.
    Enhancement,
    /// Geometric transforms (perspective solve, warp).
    Transform,
    /// Generic processing error.
    Generic,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Rectification => write!(f, "rectification"),
            ProcessingStage::Enhancement => write!(f, "enhancement"),
            ProcessingStage::Transform => write!(f, "transform"),
            ProcessingStage::Generic => write!(f, "processing"),
        }
    }
}

/// Errors that can terminate a recognition request.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The text recognizer failed to initialize. Fatal for any request
    /// issued while unavailable; never retried internally.
    #[error("recognition engine unavailable: {message}")]
    EngineUnavailable {
        /// Description of the initialization failure.
        message: String,
    },

    /// The input bytes are not a decodable image. No strategies are
    /// attempted.
    #[error("image decode")]
    ImageDecode(#[source] image::ImageError),

    /// Every enhancement strategy scored zero or produced no fragments.
    /// Distinct from an empty-but-successful parse.
    #[error("no text detected in any enhancement variant")]
    NoTextDetected,

    /// Invalid input to an internal operation.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// An internal stage failed. These are recovered locally by the stages
    /// that raise them and never reach the caller as a request outcome.
    #[error("{stage} failed: {context}")]
    Processing {
        /// The stage the error occurred in.
        stage: ProcessingStage,
        /// Additional context about the failure.
        context: String,
        /// The underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error while reading input bytes.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Creates an [`ScanError::EngineUnavailable`] with the given message.
    pub fn engine_unavailable(message: impl Into<String>) -> Self {
        Self::EngineUnavailable {
            message: message.into(),
        }
    }

    /// Creates an [`ScanError::InvalidInput`] with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a [`ScanError::Processing`] without an underlying source.
    pub fn processing(stage: ProcessingStage, context: impl Into<String>) -> Self {
        Self::Processing {
            stage,
            context: context.into(),
            source: None,
        }
    }

    /// Creates a [`ScanError::Processing`] wrapping an underlying error.
    pub fn processing_with_source(
        stage: ProcessingStage,
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            stage,
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convenient result alias for pipeline operations.
pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_stage_display() {
        assert_eq!(ProcessingStage::Rectification.to_string(), "rectification");
        assert_eq!(ProcessingStage::Generic.to_string(), "processing");
    }

    #[test]
    fn engine_unavailable_message() {
        let err = ScanError::engine_unavailable("model file missing");
        assert!(err.to_string().contains("model file missing"));
    }

    #[test]
    fn processing_error_chains_source() {
        let io = std::io::Error::other("boom");
        let err =
            ScanError::processing_with_source(ProcessingStage::Transform, "warp failed", io);
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
