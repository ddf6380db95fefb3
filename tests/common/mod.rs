// SPDX-License-Identifier: MPL-2.0
//! Shared test fixtures: a bundle source that counts fetches and can hold or
//! fail individual requests.
#![allow(dead_code)]

use futures_util::future::{BoxFuture, FutureExt};
use site_locale::application::port::{BundleSource, SourceError};
use site_locale::{Bundle, Locale, LocaleStore, Namespace};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Locale(Locale),
    Namespace(Namespace),
}

#[derive(Default)]
struct MockState {
    fetches: HashMap<Resource, usize>,
    held: HashMap<Resource, Arc<Notify>>,
    failing: HashSet<Resource>,
}

/// In-memory source. Each locale bundle maps `nav.home` to the locale's
/// native name; each namespace contributes `<namespace>.title`.
#[derive(Default)]
pub struct MockSource {
    state: Mutex<MockState>,
}

impl MockSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fetches(&self, resource: Resource) -> usize {
        self.state.lock().unwrap().fetches.get(&resource).copied().unwrap_or(0)
    }

    pub fn total_fetches(&self) -> usize {
        self.state.lock().unwrap().fetches.values().sum()
    }

    /// Requests for `resource` stay pending until [`MockSource::release`].
    pub fn hold(&self, resource: Resource) {
        self.state
            .lock()
            .unwrap()
            .held
            .insert(resource, Arc::new(Notify::new()));
    }

    pub fn release(&self, resource: Resource) {
        if let Some(notify) = self.state.lock().unwrap().held.remove(&resource) {
            notify.notify_one();
        }
    }

    pub fn fail(&self, resource: Resource) {
        self.state.lock().unwrap().failing.insert(resource);
    }

    pub fn recover(&self, resource: Resource) {
        self.state.lock().unwrap().failing.remove(&resource);
    }

    fn request(
        &self,
        resource: Resource,
        bundle: Bundle,
    ) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        let mut state = self.state.lock().unwrap();
        *state.fetches.entry(resource).or_default() += 1;
        let held = state.held.get(&resource).cloned();
        let result = if state.failing.contains(&resource) {
            Err(SourceError::Request(format!("{resource:?} unavailable")))
        } else {
            Ok(bundle)
        };
        async move {
            if let Some(notify) = held {
                notify.notified().await;
            }
            result
        }
        .boxed()
    }
}

impl BundleSource for MockSource {
    fn fetch_locale(&self, locale: Locale) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        let mut bundle = Bundle::new();
        bundle.insert("nav.home", locale.native_name());
        self.request(Resource::Locale(locale), bundle)
    }

    fn fetch_namespace(
        &self,
        namespace: Namespace,
    ) -> BoxFuture<'static, Result<Bundle, SourceError>> {
        let mut bundle = Bundle::new();
        bundle.insert(&format!("{namespace}.title"), format!("{namespace} title"));
        self.request(Resource::Namespace(namespace), bundle)
    }
}

pub fn english() -> Bundle {
    let mut en = Bundle::new();
    en.insert("nav.home", "Home");
    en.insert("footer.copyright", "© {{year}} DMC Kreatif");
    en
}

pub fn store_with(source: &Arc<MockSource>) -> LocaleStore {
    LocaleStore::new(Arc::clone(source) as Arc<dyn BundleSource>, english())
}

/// Gives spawned tasks on the current-thread runtime a chance to run.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
