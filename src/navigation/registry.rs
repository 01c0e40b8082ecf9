use std::fmt;

/// Identifier of a scroll-addressable region, e.g. `how-it-works`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        RegionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct Region<H> {
    pub id: RegionId,
    pub handle: H,
}

/// Regions of the page in document order, each paired with the handle the
/// platform needs to scroll to it. Built once when the page is composed and
/// never changed afterwards.
pub struct RegionRegistry<H> {
    regions: Vec<Region<H>>,
}

impl<H> RegionRegistry<H> {
    /// Later duplicates of an id are dropped so every id maps to one region.
    pub fn new(regions: impl IntoIterator<Item = (RegionId, H)>) -> Self {
        let mut kept: Vec<Region<H>> = Vec::new();
        for (id, handle) in regions {
            if kept.iter().any(|r| r.id == id) {
                log::warn!("Duplicate region id {} ignored", id);
                continue;
            }
            kept.push(Region { id, handle });
        }
        RegionRegistry { regions: kept }
    }

    pub fn get(&self, id: &str) -> Option<&Region<H>> {
        self.regions.iter().find(|r| r.id.as_str() == id)
    }

    /// Document position of a region.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.id.as_str() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &RegionId> {
        self.regions.iter().map(|r| &r.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region<H>> {
        self.regions.iter()
    }
}

#[cfg(test)]
impl RegionRegistry<()> {
    /// Registry without platform handles, keyed only by id.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        RegionRegistry::new(ids.into_iter().map(|id| (RegionId::new(id), ())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order() {
        let registry = RegionRegistry::from_ids(["features", "how-it-works", "contact"]);
        let ids: Vec<&str> = registry.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["features", "how-it-works", "contact"]);
        assert_eq!(registry.position("contact"), Some(2));
        assert_eq!(registry.position("security"), None);
    }

    #[test]
    fn duplicate_ids_keep_the_first_handle() {
        let registry = RegionRegistry::new(vec![
            (RegionId::new("features"), 1),
            (RegionId::new("features"), 2),
        ]);
        assert_eq!(registry.iter().count(), 1);
        assert_eq!(registry.get("features").map(|r| r.handle), Some(1));
    }
}
