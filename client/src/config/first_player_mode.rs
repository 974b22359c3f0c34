use serde::{Deserialize, Serialize};

/// Who opens the game. `Ask` keeps the startup prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Ask,
    Human,
    Computer,
}
