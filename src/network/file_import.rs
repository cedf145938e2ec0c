//! Local file import - decode a user-selected image into the same data-URI
//! representation the generation client produces.

use std::path::Path;

use base64::Engine;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not decode {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
}

/// Read and decode an image file into a data URI. Decoding is validated
/// up front so a broken file surfaces here instead of at render time.
pub async fn decode_file(path: &Path) -> Result<String, ImportError> {
    let display = path.display().to_string();

    let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Read {
        path: display.clone(),
        source,
    })?;

    let format = image::guess_format(&bytes).map_err(|source| ImportError::Decode {
        path: display.clone(),
        source,
    })?;
    image::load_from_memory_with_format(&bytes, format).map_err(|source| {
        ImportError::Decode {
            path: display,
            source,
        }
    })?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{encoded}", format.to_mime_type()))
}
