use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::templates::config::TemplateConfig;
use crate::templates::TemplateError;

/// The registry shipped with the binary.
const BUILTIN_CONFIG: &str = include_str!("template_config.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryFile {
    default_template: String,
    #[serde(default)]
    templates: Vec<TemplateConfig>,
}

/// All known templates, in declaration order, plus the fallback id.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    default_id: String,
    templates: Vec<TemplateConfig>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Builds a registry, rejecting duplicate ids and a default that names no template.
    ///
    /// An empty template list is accepted; the renderer reports it to the user instead.
    pub fn new(default_id: String, templates: Vec<TemplateConfig>) -> Result<Self, TemplateError> {
        let mut index = HashMap::with_capacity(templates.len());
        for (i, template) in templates.iter().enumerate() {
            if index.insert(template.id.clone(), i).is_some() {
                return Err(TemplateError::DuplicateId(template.id.clone()));
            }
        }

        if !templates.is_empty() && !index.contains_key(&default_id) {
            return Err(TemplateError::UnknownDefault(default_id));
        }

        Ok(Self {
            default_id,
            templates,
            index,
        })
    }

    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_json(BUILTIN_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::new(file.default_template, file.templates)
    }

    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json(&json)?;
        info!(
            "Loaded {} templates from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Replaces the declared default; the new id must exist.
    pub fn with_default(mut self, default_id: &str) -> Result<Self, TemplateError> {
        if !self.index.contains_key(default_id) {
            return Err(TemplateError::UnknownDefault(default_id.to_string()));
        }
        self.default_id = default_id.to_string();
        Ok(self)
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Exact lookup. No fallback.
    pub fn get(&self, id: &str) -> Option<&TemplateConfig> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// Lookup with fallback to the default template for a missing or unknown id.
    /// Returns `None` only when the registry is empty.
    pub fn resolve(&self, id: Option<&str>) -> Option<&TemplateConfig> {
        if let Some(template) = id.and_then(|id| self.get(id)) {
            return Some(template);
        }
        debug!(
            requested = ?id,
            fallback = %self.default_id,
            "Template not found, using default"
        );
        self.get(&self.default_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateConfig> {
        self.templates.iter()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !template.category.is_empty() && !seen.contains(&template.category.as_str()) {
                seen.push(template.category.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::templates::config::DynamicLayout;

    const SMALL_REGISTRY: &str = r#"{
        "defaultTemplate": "plain",
        "templates": [
            {"id": "plain", "name": "Plain", "category": "Simple",
             "dynamicLayout": {"layout": "single", "sections": [{"type": "header"}]}},
            {"id": "old", "name": "Old", "category": "Classic", "layout": "centered-traditional"}
        ]
    }"#;

    #[test]
    fn test_builtin_registry_loads() {
        let registry = TemplateRegistry::builtin().expect("embedded registry must parse");
        assert_eq!(registry.default_id(), "minimal");
        assert!(registry.len() >= 20, "expected ~20 templates, got {}", registry.len());
        assert!(registry.get("minimal").is_some());
        assert!(registry.get("harvard").is_some());
        assert!(registry.get("classic").is_some());
    }

    #[test]
    fn test_builtin_registry_covers_every_layout_kind() {
        let registry = TemplateRegistry::builtin().unwrap();
        let kinds: Vec<&str> = registry.iter().map(|t| t.layout_kind()).collect();
        for expected in [
            "single",
            "two-column",
            "two-column-with-header",
            "three-column",
            "photo-single-column",
            "centered-traditional",
            "minimal-centered",
            "sidebar-modern",
            "dark-sidebar-timeline",
        ] {
            assert!(kinds.contains(&expected), "no template uses {expected}");
        }
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let registry = TemplateRegistry::from_json(SMALL_REGISTRY).unwrap();
        assert_eq!(registry.resolve(Some("old")).unwrap().id, "old");
        assert_eq!(registry.resolve(Some("does-not-exist")).unwrap().id, "plain");
        assert_eq!(registry.resolve(None).unwrap().id, "plain");
    }

    #[test]
    fn test_get_has_no_fallback() {
        let registry = TemplateRegistry::from_json(SMALL_REGISTRY).unwrap();
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"defaultTemplate": "a", "templates": [
            {"id": "a", "name": "A"}, {"id": "a", "name": "A again"}
        ]}"#;
        assert!(matches!(
            TemplateRegistry::from_json(json),
            Err(TemplateError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_unknown_default_rejected() {
        let json = r#"{"defaultTemplate": "missing", "templates": [{"id": "a", "name": "A"}]}"#;
        assert!(matches!(
            TemplateRegistry::from_json(json),
            Err(TemplateError::UnknownDefault(_))
        ));
    }

    #[test]
    fn test_empty_registry_allowed_but_resolves_nothing() {
        let registry =
            TemplateRegistry::from_json(r#"{"defaultTemplate": "minimal", "templates": []}"#)
                .unwrap();
        assert!(registry.is_empty());
        assert!(registry.resolve(Some("minimal")).is_none());
    }

    #[test]
    fn test_unknown_section_fails_whole_registry() {
        let json = r#"{"defaultTemplate": "a", "templates": [
            {"id": "a", "name": "A", "dynamicLayout": {"layout": "single", "sections": [{"type": "hobbies"}]}}
        ]}"#;
        assert!(matches!(
            TemplateRegistry::from_json(json),
            Err(TemplateError::Parse(_))
        ));
    }

    #[test]
    fn test_with_default_override() {
        let registry = TemplateRegistry::from_json(SMALL_REGISTRY).unwrap();
        let registry = registry.with_default("old").unwrap();
        assert_eq!(registry.resolve(Some("nope")).unwrap().id, "old");
        assert!(TemplateRegistry::from_json(SMALL_REGISTRY)
            .unwrap()
            .with_default("nope")
            .is_err());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let registry = TemplateRegistry::from_json(SMALL_REGISTRY).unwrap();
        assert_eq!(registry.categories(), vec!["Simple", "Classic"]);
    }

    #[test]
    fn test_from_path_reads_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_REGISTRY.as_bytes()).unwrap();
        let registry = TemplateRegistry::from_path(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(matches!(
            registry.get("plain").unwrap().dynamic_layout,
            Some(DynamicLayout::Single(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = TemplateRegistry::from_path(Path::new("/nonexistent/templates.json"));
        assert!(matches!(result, Err(TemplateError::Io { .. })));
    }
}
