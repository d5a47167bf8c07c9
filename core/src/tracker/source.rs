//! Visibility-source seam between the tracker and the view layer.

use nexus_types::{ObserverConfig, SectionId};

use super::VisibilitySignal;

/// Callback invoked with one batch of signals per view-layer notification.
pub type VisibilityCallback = Box<dyn FnMut(&[VisibilitySignal])>;

/// Opaque handle returned by [`VisibilitySource::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(u32);

impl SubscriptionHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
}

/// Something that can report when named regions cross an observation band.
///
/// Regions that do not exist when `register` is called are skipped without
/// error and never reported. After `dispose` the callback is dropped and
/// never invoked again; disposing an unknown handle does nothing.
pub trait VisibilitySource {
    fn register(
        &mut self,
        regions: &[SectionId],
        config: &ObserverConfig,
        on_change: VisibilityCallback,
    ) -> SubscriptionHandle;

    fn dispose(&mut self, handle: SubscriptionHandle);
}
