// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use smart_handle::{SharedHandle, UniqueHandle};
use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};

#[derive(Default)]
struct Probe {
    calls: AtomicUsize,
    last: AtomicU64,
}

impl Probe {
    fn release(self: &Arc<Self>) -> impl FnOnce(u64) + Send + 'static {
        let probe = Arc::clone(self);
        move |v: u64| {
            probe.calls.fetch_add(1, Ordering::SeqCst);
            probe.last.store(v, Ordering::SeqCst);
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

proptest! {
    #[test]
    fn unique_releases_value_once(v in any::<u64>()) {
        let probe = Arc::new(Probe::default());
        drop(UniqueHandle::new(v, probe.release()));
        prop_assert_eq!(probe.calls(), 1);
        prop_assert_eq!(probe.last.load(Ordering::SeqCst), v);
    }

    #[test]
    fn moved_unique_releases_once(v in any::<u64>()) {
        let probe = Arc::new(Probe::default());
        let e = UniqueHandle::new(v, probe.release());
        let e2 = e;
        prop_assert_eq!(probe.calls(), 0);
        drop(e2);
        prop_assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn shared_count_tracks_copies(v in any::<u64>(), n in 0usize..32) {
        let probe = Arc::new(Probe::default());
        let shared = SharedHandle::new(v, probe.release());
        prop_assert_eq!(shared.use_count(), 1);

        let mut copies: Vec<_> = (0..n).map(|_| shared.clone()).collect();
        prop_assert_eq!(shared.use_count(), n + 1);

        let weak = shared.downgrade();
        prop_assert_eq!(shared.use_count(), n + 1);

        drop(shared);
        while let Some(copy) = copies.pop() {
            prop_assert_eq!(probe.calls(), 0);
            prop_assert_eq!(copy.use_count(), copies.len() + 1);
            drop(copy);
        }

        prop_assert_eq!(probe.calls(), 1);
        prop_assert_eq!(probe.last.load(Ordering::SeqCst), v);
        prop_assert!(weak.lock().is_none());
        prop_assert!(weak.expired());
    }

    #[test]
    fn conversion_does_not_release(v in any::<u64>()) {
        let probe = Arc::new(Probe::default());
        let shared = UniqueHandle::new(v, probe.release())
            .into_shared()
            .expect("owned handle converts");
        prop_assert_eq!(probe.calls(), 0);
        prop_assert_eq!(shared.get(), v);
        drop(shared);
        prop_assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn promotion_adds_one_owner(v in any::<u64>()) {
        let shared = SharedHandle::new(v, |_| {});
        let weak = shared.downgrade();
        let promoted = weak.lock();
        prop_assert!(promoted.is_some());
        prop_assert_eq!(shared.use_count(), 2);
        prop_assert_eq!(promoted.map(|p| p.get()), Some(v));
        prop_assert_eq!(shared.use_count(), 1);
    }
}
