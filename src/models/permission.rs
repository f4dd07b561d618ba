//! Permissions and the actors that hold them

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Actions gated behind a permission rather than ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Edit (and therefore view) any problem, not only one's own
    EditProblem,
}

/// Anyone whose rights can be checked: usually the logged-in [`User`](super::User).
pub trait Actor {
    fn id(&self) -> Uuid;

    fn can(&self, permission: Permission) -> bool;
}
