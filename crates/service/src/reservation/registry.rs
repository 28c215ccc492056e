//! Class and professor registries as capabilities.
//!
//! Both lookups fail closed: any transport error, timeout or non-success
//! response is reported as "absent".

use async_trait::async_trait;
use common::registry::RegistryClient;
use tracing::warn;

#[async_trait]
pub trait ClassRegistry: Send + Sync {
    async fn class_exists(&self, class_id: i32) -> bool;
}

#[async_trait]
pub trait ProfessorRegistry: Send + Sync {
    /// Professor's display name, if the professor exists.
    async fn resolve_professor(&self, professor_id: i32) -> Option<String>;
}

#[async_trait]
impl ClassRegistry for RegistryClient {
    async fn class_exists(&self, class_id: i32) -> bool {
        match self.fetch_class(class_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(class_id, error = %e, "class lookup failed");
                false
            }
        }
    }
}

#[async_trait]
impl ProfessorRegistry for RegistryClient {
    async fn resolve_professor(&self, professor_id: i32) -> Option<String> {
        match self.fetch_professor(professor_id).await {
            Ok(p) if !p.name.trim().is_empty() => Some(p.name),
            Ok(_) => {
                warn!(professor_id, "professor record has an empty name");
                None
            }
            Err(e) => {
                warn!(professor_id, error = %e, "professor lookup failed");
                None
            }
        }
    }
}

/// In-process registry for tests and local runs without the real services.
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct StaticRegistry {
        classes: HashSet<i32>,
        professors: HashMap<i32, String>,
        lookups: AtomicUsize,
    }

    impl StaticRegistry {
        pub fn with_class(mut self, class_id: i32) -> Self {
            self.classes.insert(class_id);
            self
        }

        pub fn with_professor(mut self, professor_id: i32, name: &str) -> Self {
            self.professors.insert(professor_id, name.to_string());
            self
        }

        /// Number of lookups served so far, of either kind.
        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClassRegistry for StaticRegistry {
        async fn class_exists(&self, class_id: i32) -> bool {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.classes.contains(&class_id)
        }
    }

    #[async_trait]
    impl ProfessorRegistry for StaticRegistry {
        async fn resolve_professor(&self, professor_id: i32) -> Option<String> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.professors.get(&professor_id).cloned()
        }
    }
}
