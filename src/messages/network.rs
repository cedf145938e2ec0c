//! Network messages - communication between App and Network layers

use std::path::PathBuf;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Request an image from the generation service
    Generate {
        id: u64,
        prompt: String,
        decal_type: &'static str,
    },
    /// Read and decode a local image file
    DecodeFile {
        id: u64,
        path: PathBuf,
        decal_type: &'static str,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Generation succeeded; `image` is a data URI ready for the resolver
    Generated {
        id: u64,
        decal_type: &'static str,
        image: String,
    },
    /// Generation request failed (non-2xx, malformed body, connection error)
    GenerateFailed { id: u64, message: String },
    /// Local file decoded into a data URI
    Decoded {
        id: u64,
        decal_type: &'static str,
        image: String,
    },
    /// Local file could not be read or decoded
    DecodeFailed { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Generated { id, .. } => *id,
            NetworkResponse::GenerateFailed { id, .. } => *id,
            NetworkResponse::Decoded { id, .. } => *id,
            NetworkResponse::DecodeFailed { id, .. } => *id,
        }
    }
}
