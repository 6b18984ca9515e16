use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;

use super::errors::AvatarError;

/// Content types the avatar picker accepts.
pub const ACCEPTED_AVATAR_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

const LOCAL_PREVIEW_SCHEME: &str = "blob:profileform/";

static NEXT_PREVIEW_ID: AtomicU64 = AtomicU64::new(1);

/// A picked avatar image, submitted as is together with the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    fn check(&self) -> Result<(), AvatarError> {
        let content_type = self.content_type.trim().to_ascii_lowercase();
        if !ACCEPTED_AVATAR_TYPES.contains(&content_type.as_str()) {
            return Err(AvatarError::UnsupportedType(self.content_type.clone()));
        }
        if self.bytes.is_empty() {
            return Err(AvatarError::Empty(self.file_name.clone()));
        }
        Ok(())
    }
}

/// What the avatar slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarPreview {
    /// The avatar already stored for the user.
    Remote(String),
    /// A picked, not yet submitted file. The handle is unique per upload.
    Local { handle: String, file_name: String },
}

impl AvatarPreview {
    /// Source to render the image from.
    pub fn source(&self) -> &str {
        match self {
            AvatarPreview::Remote(url) => url,
            AvatarPreview::Local { handle, .. } => handle,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, AvatarPreview::Local { .. })
    }
}

/// Checks a picked file and creates a local preview handle for it.
pub(super) fn preview_for(file: &AvatarFile) -> Result<AvatarPreview, AvatarError> {
    if let Err(err) = file.check() {
        warn!("Rejected avatar {:?}: {}", file.file_name, err);
        return Err(err);
    }
    let id = NEXT_PREVIEW_ID.fetch_add(1, Ordering::Relaxed);
    Ok(AvatarPreview::Local {
        handle: fast_cat::concat_str!(LOCAL_PREVIEW_SCHEME, &id.to_string()),
        file_name: file.file_name.clone(),
    })
}
