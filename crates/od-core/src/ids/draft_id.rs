use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifies one registration attempt (one draft instance).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(String);

impl_id!(DraftId);
