use std::rc::Rc;

use super::registry::{RegionId, RegionRegistry};

/// What the reconciler needs from the browser window.
pub trait Viewport {
    type Handle;

    /// Current address fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;

    /// Replaces the address fragment without reloading the page.
    fn push_fragment(&mut self, href: &str);

    fn scroll_to_top(&mut self);

    /// Smoothly scrolls so the region's top edge meets the viewport's top.
    fn scroll_to_region(&mut self, handle: &Self::Handle);
}

/// Where an internal link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Region(String),
}

impl NavTarget {
    /// Parses `#`, `#id` or an empty fragment. Anything else is not ours.
    pub fn parse(href: &str) -> Option<NavTarget> {
        if href.is_empty() {
            return Some(NavTarget::Top);
        }
        let fragment = href.strip_prefix('#')?;
        if fragment.is_empty() {
            return Some(NavTarget::Top);
        }
        let decoded = urlencoding::decode(fragment)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| fragment.to_string());
        Some(NavTarget::Region(decoded))
    }
}

/// Result of resolving one navigation intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Top,
    Region(RegionId),
    /// Fragment names no registered region. Nothing was scrolled.
    Unresolved,
    /// Not a fragment link. The browser handles it.
    Ignored,
}

/// Scroll that waits one tick for layout before it runs.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct DeferredScroll {
    href: String,
}

impl DeferredScroll {
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn run<H, V>(self, reconciler: &HashReconciler<H>, viewport: &mut V) -> Resolution
    where
        V: Viewport<Handle = H>,
    {
        reconciler.scroll_to(viewport, &self.href)
    }
}

/// Keeps the address fragment and the scroll position in agreement.
pub struct HashReconciler<H> {
    registry: Rc<RegionRegistry<H>>,
}

impl<H> HashReconciler<H> {
    pub fn new(registry: Rc<RegionRegistry<H>>) -> Self {
        HashReconciler { registry }
    }

    /// A click on an internal link. Updates the fragment, then scrolls once.
    pub fn handle_internal_link_activation<V>(&self, viewport: &mut V, href: &str) -> Resolution
    where
        V: Viewport<Handle = H>,
    {
        let Some(target) = NavTarget::parse(href) else {
            return Resolution::Ignored;
        };
        // `Location.hash` reads "" for a bare "#", and may still be encoded.
        if NavTarget::parse(&viewport.fragment()).as_ref() != Some(&target) {
            viewport.push_fragment(href);
        }
        self.scroll_to(viewport, href)
    }

    /// The page just became ready. If it was loaded with a fragment, the
    /// scroll is handed back to run after the first layout pass.
    pub fn handle_initial_fragment<V>(&self, viewport: &V) -> Option<DeferredScroll>
    where
        V: Viewport<Handle = H>,
    {
        let fragment = viewport.fragment();
        if fragment.is_empty() || fragment == "#" {
            return None;
        }
        Some(DeferredScroll { href: fragment })
    }

    /// The fragment changed outside our control, e.g. back/forward.
    pub fn handle_address_fragment_change<V>(&self, viewport: &mut V) -> Resolution
    where
        V: Viewport<Handle = H>,
    {
        let fragment = viewport.fragment();
        self.scroll_to(viewport, &fragment)
    }

    fn scroll_to<V>(&self, viewport: &mut V, href: &str) -> Resolution
    where
        V: Viewport<Handle = H>,
    {
        match NavTarget::parse(href) {
            None => Resolution::Ignored,
            Some(NavTarget::Top) => {
                viewport.scroll_to_top();
                Resolution::Top
            }
            Some(NavTarget::Region(id)) => match self.registry.get(&id) {
                Some(region) => {
                    viewport.scroll_to_region(&region.handle);
                    Resolution::Region(region.id.clone())
                }
                None => {
                    log::debug!("No section with id {:?}, not scrolling", id);
                    Resolution::Unresolved
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SECTION_IDS;
    use crate::navigation::active::active_section;
    use crate::navigation::tracker::{VisibilityEntry, VisibilityTracker};

    /// Page with sections stacked 1000px apart, starting at 800px. Reads the
    /// fragment back the way `Location.hash` does: a bare "#" reads as "".
    struct FakeViewport {
        fragment: String,
        history: Vec<String>,
        scroll_y: f64,
        scrolls: usize,
    }

    impl FakeViewport {
        fn new(fragment: &str) -> Self {
            FakeViewport {
                fragment: fragment.to_string(),
                history: Vec::new(),
                scroll_y: 0.0,
                scrolls: 0,
            }
        }
    }

    impl Viewport for FakeViewport {
        type Handle = f64;

        fn fragment(&self) -> String {
            if self.fragment == "#" {
                String::new()
            } else {
                self.fragment.clone()
            }
        }

        fn push_fragment(&mut self, href: &str) {
            self.fragment = href.to_string();
            self.history.push(href.to_string());
        }

        fn scroll_to_top(&mut self) {
            self.scroll_y = 0.0;
            self.scrolls += 1;
        }

        fn scroll_to_region(&mut self, offset: &f64) {
            self.scroll_y = *offset;
            self.scrolls += 1;
        }
    }

    fn registry() -> Rc<RegionRegistry<f64>> {
        Rc::new(RegionRegistry::new(
            SECTION_IDS
                .iter()
                .enumerate()
                .map(|(i, id)| (RegionId::new(*id), 800.0 + 1000.0 * i as f64)),
        ))
    }

    fn reconciler() -> HashReconciler<f64> {
        HashReconciler::new(registry())
    }

    #[test]
    fn parses_targets() {
        assert_eq!(NavTarget::parse("#"), Some(NavTarget::Top));
        assert_eq!(NavTarget::parse(""), Some(NavTarget::Top));
        assert_eq!(
            NavTarget::parse("#how-it-works"),
            Some(NavTarget::Region("how-it-works".to_string()))
        );
        assert_eq!(
            NavTarget::parse("#how%2Dit%2Dworks"),
            Some(NavTarget::Region("how-it-works".to_string()))
        );
        assert_eq!(NavTarget::parse("https://soappnew.netlify.app/"), None);
    }

    #[test]
    fn link_scrolls_region_to_top_of_viewport() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("");

        let resolution = reconciler.handle_internal_link_activation(&mut viewport, "#features");

        assert_eq!(resolution, Resolution::Region(RegionId::new("features")));
        assert_eq!(viewport.fragment, "#features");
        assert_eq!(viewport.scroll_y, 800.0);
        assert_eq!(viewport.scrolls, 1);
    }

    #[test]
    fn repeated_activation_is_idempotent() {
        let reconciler = reconciler();
        let mut once = FakeViewport::new("");
        let mut twice = FakeViewport::new("");

        reconciler.handle_internal_link_activation(&mut once, "#features");
        reconciler.handle_internal_link_activation(&mut twice, "#features");
        reconciler.handle_internal_link_activation(&mut twice, "#features");

        assert_eq!(once.scroll_y, twice.scroll_y);
        assert_eq!(once.fragment, twice.fragment);
        assert_eq!(twice.history, vec!["#features".to_string()]);
    }

    #[test]
    fn repeated_home_clicks_push_history_once() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("#features");

        for _ in 0..3 {
            assert_eq!(
                reconciler.handle_internal_link_activation(&mut viewport, "#"),
                Resolution::Top
            );
        }

        assert_eq!(viewport.history, vec!["#".to_string()]);
        assert_eq!(viewport.scrolls, 3);
        assert_eq!(viewport.scroll_y, 0.0);
    }

    #[test]
    fn home_click_on_a_bare_address_adds_no_history() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("");

        reconciler.handle_internal_link_activation(&mut viewport, "#");

        assert!(viewport.history.is_empty());
        assert_eq!(viewport.scrolls, 1);
    }

    #[test]
    fn encoded_fragment_matches_its_decoded_link() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("#how%2Dit%2Dworks");

        let resolution = reconciler.handle_internal_link_activation(&mut viewport, "#how-it-works");

        assert_eq!(resolution, Resolution::Region(RegionId::new("how-it-works")));
        assert!(viewport.history.is_empty());
        assert_eq!(viewport.scroll_y, 1800.0);
    }

    #[test]
    fn unknown_target_only_updates_fragment() {
        let registry = registry();
        let reconciler = HashReconciler::new(registry.clone());
        let (writer, reader) = active_section();
        let tracker = VisibilityTracker::new(registry, 0.3, writer);
        tracker.on_visibility(&[VisibilityEntry::new("security", 0.8)]);

        let mut viewport = FakeViewport::new("");
        viewport.scroll_y = 1234.0;
        let resolution = reconciler.handle_internal_link_activation(&mut viewport, "#does-not-exist");

        assert_eq!(resolution, Resolution::Unresolved);
        assert_eq!(viewport.fragment, "#does-not-exist");
        assert_eq!(viewport.scroll_y, 1234.0);
        assert_eq!(viewport.scrolls, 0);
        assert_eq!(reader.get(), Some(RegionId::new("security")));
    }

    #[test]
    fn bare_hash_returns_to_top() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("#contact");
        viewport.scroll_y = 4800.0;

        let resolution = reconciler.handle_internal_link_activation(&mut viewport, "#");

        assert_eq!(resolution, Resolution::Top);
        assert_eq!(viewport.scroll_y, 0.0);
        assert_eq!(viewport.fragment, "#");
    }

    #[test]
    fn external_links_are_left_alone() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("");

        let resolution =
            reconciler.handle_internal_link_activation(&mut viewport, "https://x.com/pratikkale26");

        assert_eq!(resolution, Resolution::Ignored);
        assert!(viewport.history.is_empty());
        assert_eq!(viewport.scrolls, 0);
    }

    #[test]
    fn initial_fragment_waits_for_layout() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("#contact");

        let deferred = reconciler
            .handle_initial_fragment(&viewport)
            .expect("fragment present");
        assert_eq!(viewport.scrolls, 0);

        let resolution = deferred.run(&reconciler, &mut viewport);
        assert_eq!(resolution, Resolution::Region(RegionId::new("contact")));
        assert_eq!(viewport.scroll_y, 4800.0);
        assert!(viewport.history.is_empty());
    }

    #[test]
    fn no_initial_fragment_means_no_scroll() {
        let reconciler = reconciler();
        assert_eq!(reconciler.handle_initial_fragment(&FakeViewport::new("")), None);
        assert_eq!(reconciler.handle_initial_fragment(&FakeViewport::new("#")), None);
    }

    #[test]
    fn fragment_change_rereads_the_address() {
        let reconciler = reconciler();
        let mut viewport = FakeViewport::new("#security");

        reconciler.handle_address_fragment_change(&mut viewport);
        assert_eq!(viewport.scroll_y, 3800.0);

        viewport.fragment = "#revolution".to_string();
        reconciler.handle_address_fragment_change(&mut viewport);
        assert_eq!(viewport.scroll_y, 2800.0);

        viewport.fragment = String::new();
        assert_eq!(reconciler.handle_address_fragment_change(&mut viewport), Resolution::Top);
        assert_eq!(viewport.scroll_y, 0.0);
        assert!(viewport.history.is_empty());
    }
}
