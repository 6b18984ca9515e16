mod avatar;
pub mod errors;
pub mod profileform;

pub use avatar::{ACCEPTED_AVATAR_TYPES, AvatarFile, AvatarPreview};
pub use errors::{AvatarError, SubmitError};
pub use profileform::{ProfileForm, ProfileUpdate, UserProfile};
