//! Process-wide template catalog.
//!
//! The catalog is populated exactly once with the built-in skin list and
//! lives for the process lifetime. Steady state is read-only; `register` /
//! `unregister` are administrative and go through the same `RwLock` so
//! in-flight lookups never observe a partially updated catalog.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use tracing::{info, warn};

use super::descriptor::TemplateDescriptor;
use super::skins;
use super::CvTemplate;

/// Designated default skin. Registered first, so the designated-default and
/// first-registered fallbacks agree.
pub const DEFAULT_TEMPLATE_ID: &str = "minimal";

static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();

/// The process-wide registry, initialized with the built-ins on first
/// access. Repeated calls return the same instance.
pub fn global() -> &'static TemplateRegistry {
    REGISTRY.get_or_init(|| {
        let registry = TemplateRegistry::with_builtins();
        info!("template registry initialized ({} skins)", registry.len());
        registry
    })
}

struct Catalog {
    templates: HashMap<String, Arc<dyn CvTemplate>>,
    /// Registration order; drives `all()` and the first-registered fallback.
    order: Vec<String>,
}

pub struct TemplateRegistry {
    inner: RwLock<Catalog>,
}

impl TemplateRegistry {
    /// Builds a catalog holding every built-in skin.
    ///
    /// Postcondition: the catalog is non-empty and contains
    /// [`DEFAULT_TEMPLATE_ID`].
    pub fn with_builtins() -> Self {
        let registry = TemplateRegistry {
            inner: RwLock::new(Catalog {
                templates: HashMap::new(),
                order: Vec::new(),
            }),
        };
        for skin in skins::builtins() {
            registry.register(skin);
        }
        assert!(
            registry.has(DEFAULT_TEMPLATE_ID),
            "built-in skin list must include the default template"
        );
        registry
    }

    /// O(1) lookup of the render entry point for an id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn CvTemplate>> {
        self.inner.read().unwrap().templates.get(id).cloned()
    }

    pub fn info(&self, id: &str) -> Option<TemplateDescriptor> {
        self.get(id).map(|t| t.descriptor().clone())
    }

    pub fn has(&self, id: &str) -> bool {
        self.inner.read().unwrap().templates.contains_key(id)
    }

    /// All descriptors in registration order. Stable across calls.
    pub fn all(&self) -> Vec<TemplateDescriptor> {
        let catalog = self.inner.read().unwrap();
        catalog
            .order
            .iter()
            .filter_map(|id| catalog.templates.get(id))
            .map(|t| t.descriptor().clone())
            .collect()
    }

    /// Exact category match, preserving registration order.
    pub fn by_category(&self, category: &str) -> Vec<TemplateDescriptor> {
        self.all()
            .into_iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description, and
    /// category. A match on any field is sufficient.
    pub fn search(&self, query: &str) -> Vec<TemplateDescriptor> {
        let needle = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.description.to_lowercase().contains(&needle)
                    || d.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Inserts or overwrites an entry by id. Overwriting silently changes
    /// behavior for every existing reference to the id, so it is logged.
    pub fn register(&self, template: Arc<dyn CvTemplate>) {
        let id = template.id().to_string();
        let mut catalog = self.inner.write().unwrap();
        if catalog.templates.insert(id.clone(), template).is_some() {
            warn!("template '{id}' re-registered; previous implementation replaced");
        } else {
            catalog.order.push(id);
        }
    }

    /// Removes an entry if present.
    pub fn unregister(&self, id: &str) -> bool {
        let mut catalog = self.inner.write().unwrap();
        if catalog.templates.remove(id).is_some() {
            catalog.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    /// The designated default's descriptor, falling back to the first
    /// registered skin if the default was unregistered.
    pub fn default_template(&self) -> Option<TemplateDescriptor> {
        if let Some(desc) = self.info(DEFAULT_TEMPLATE_ID) {
            return Some(desc);
        }
        self.all().into_iter().next()
    }

    /// Distinct categories currently registered, in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for desc in self.all() {
            if !seen.contains(&desc.category) {
                seen.push(desc.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
