use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Professor record as returned by the professor registry.
/// Only `name` is consumed; other fields are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct ProfessorRecord {
    pub name: String,
}
