use thiserror::Error;

/// One navigable section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    /// Target looked up in the rendered page
    pub anchor: &'static str,
    pub label: &'static str,
}

impl SectionDescriptor {
    pub const fn new(id: &'static str, anchor: &'static str, label: &'static str) -> Self {
        Self { id, anchor, label }
    }

    /// In-page link form, e.g. `#about`
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry must not be empty")]
    Empty,

    #[error("duplicate section id: {0}")]
    DuplicateId(&'static str),

    #[error("duplicate section anchor: {0}")]
    DuplicateAnchor(&'static str),
}

const PORTFOLIO_SECTIONS: [SectionDescriptor; 7] = [
    SectionDescriptor::new("home", "home", "Home"),
    SectionDescriptor::new("about", "about", "About"),
    SectionDescriptor::new("skills", "skills", "Skills"),
    SectionDescriptor::new("projects", "projects", "Projects"),
    SectionDescriptor::new("devtools", "devtools", "Dev Tools"),
    SectionDescriptor::new("social", "social", "Social"),
    SectionDescriptor::new("contact", "contact", "Contact"),
];

/// Ordered, read-only list of sections. Order is both the display order
/// of the navigation bar and the precedence used when resolving the
/// active section. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, section) in sections.iter().enumerate() {
            let earlier = &sections[..i];
            if earlier.iter().any(|s| s.id == section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
            if earlier.iter().any(|s| s.anchor == section.anchor) {
                return Err(RegistryError::DuplicateAnchor(section.anchor));
            }
        }
        Ok(Self { sections })
    }

    /// The seven sections of the portfolio page
    pub fn portfolio() -> Self {
        Self {
            sections: PORTFOLIO_SECTIONS.to_vec(),
        }
    }

    /// Topmost section; the default active one
    pub fn first(&self) -> &SectionDescriptor {
        &self.sections[0]
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn by_anchor(&self, anchor: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.anchor == anchor)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionDescriptor> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a SectionDescriptor;
    type IntoIter = std::slice::Iter<'a, SectionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_order() {
        let registry = SectionRegistry::portfolio();
        let ids: Vec<_> = registry.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["home", "about", "skills", "projects", "devtools", "social", "contact"]
        );
        assert_eq!(registry.first().id, "home");
        assert_eq!(registry.get("devtools").map(|s| s.label), Some("Dev Tools"));
    }

    #[test]
    fn test_portfolio_is_valid() {
        assert!(SectionRegistry::new(PORTFOLIO_SECTIONS.to_vec()).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(SectionRegistry::new(Vec::new()), Err(RegistryError::Empty));
    }

    #[test]
    fn test_rejects_duplicates() {
        let dup_id = vec![
            SectionDescriptor::new("home", "top", "Home"),
            SectionDescriptor::new("home", "start", "Start"),
        ];
        assert_eq!(SectionRegistry::new(dup_id), Err(RegistryError::DuplicateId("home")));

        let dup_anchor = vec![
            SectionDescriptor::new("home", "top", "Home"),
            SectionDescriptor::new("start", "top", "Start"),
        ];
        assert_eq!(
            SectionRegistry::new(dup_anchor),
            Err(RegistryError::DuplicateAnchor("top"))
        );
    }

    #[test]
    fn test_lookup() {
        let registry = SectionRegistry::portfolio();
        assert!(registry.contains("social"));
        assert!(!registry.contains("blog"));
        assert_eq!(registry.by_anchor("contact").map(|s| s.id), Some("contact"));
        assert_eq!(registry.get("about").unwrap().href(), "#about");
    }
}
