/// Single selection over a fixed list of tab ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<&'static str>,
    active: usize,
}

impl TabSet {
    /// Returns None for an empty list; the first id starts active.
    pub fn new(ids: &[&'static str]) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        Some(Self {
            ids: ids.to_vec(),
            active: 0,
        })
    }

    /// Select by id. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|t| *t == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &'static str {
        self.ids[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }
}
