// SPDX-License-Identifier: MPL-2.0
//! The locale store: sole owner of every translation loaded in a session.
//!
//! The default locale's bundle is handed over at construction. Other locales
//! and the English namespace slices are fetched from a [`BundleSource`] the
//! first time they are asked for, then kept for the lifetime of the store.
//!
//! # Deduplication
//!
//! Each pending fetch lives in an in-flight map as a shared future that
//! performs the fetch *and* the merge. A second caller for the same id clones
//! that future instead of starting another fetch, so both the network request
//! and the merge happen once. The entry is removed, under the same lock as the
//! merge, when the fetch settles; on failure nothing is merged and the next
//! call starts over.
//!
//! Fetches are driven by whoever awaits them. A caller that gives up (its
//! future is dropped) leaves the shared future in the map, and the next
//! caller resumes it.

use crate::application::port::{BundleSource, SourceError};
use crate::domain::{Bundle, Locale, Namespace};
use crate::error::{Error, Result};
use crate::i18n::coverage::CoverageReport;
use crate::i18n::format;
use crate::i18n::paths;
use fluent_bundle::FluentArgs;
use futures_util::future::{join_all, BoxFuture, FutureExt, Shared};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, warn};

type SharedLoad = Shared<BoxFuture<'static, std::result::Result<(), SourceError>>>;

/// Load progress of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

struct StoreState {
    bundles: HashMap<Locale, Bundle>,
    active: Locale,
    loaded_namespaces: HashSet<Namespace>,
    locales_in_flight: HashMap<Locale, SharedLoad>,
    namespaces_in_flight: HashMap<Namespace, SharedLoad>,
}

struct Inner {
    source: Arc<dyn BundleSource>,
    state: Mutex<StoreState>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to the session's translation store.
///
/// Cloning is cheap; every clone sees the same state.
#[derive(Clone)]
pub struct LocaleStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("LocaleStore")
            .field("active", &state.active)
            .field("locales", &state.bundles.keys().collect::<Vec<_>>())
            .field("namespaces", &state.loaded_namespaces)
            .finish()
    }
}

impl LocaleStore {
    /// Creates a store holding `default_bundle` as the resident default
    /// locale, which is also the active locale.
    pub fn new(source: Arc<dyn BundleSource>, default_bundle: Bundle) -> Self {
        let mut bundles = HashMap::new();
        bundles.insert(Locale::DEFAULT, default_bundle);
        Self {
            inner: Arc::new(Inner {
                source,
                state: Mutex::new(StoreState {
                    bundles,
                    active: Locale::DEFAULT,
                    loaded_namespaces: HashSet::new(),
                    locales_in_flight: HashMap::new(),
                    namespaces_in_flight: HashMap::new(),
                }),
            }),
        }
    }

    // =========================================================================
    // Locale loading
    // =========================================================================

    /// Makes `locale`'s bundle resident.
    ///
    /// Returns immediately for the default locale or a loaded one. Concurrent
    /// calls for the same locale share a single fetch.
    pub async fn load_locale(&self, locale: Locale) -> Result<()> {
        if locale.is_default() {
            return Ok(());
        }
        let pending = {
            let mut state = self.inner.lock();
            if state.bundles.contains_key(&locale) {
                return Ok(());
            }
            match state.locales_in_flight.get(&locale) {
                Some(pending) => {
                    debug!(%locale, "joining in-flight locale load");
                    pending.clone()
                }
                None => {
                    info!(%locale, "loading locale bundle");
                    let pending = self.locale_load(locale);
                    state.locales_in_flight.insert(locale, pending.clone());
                    pending
                }
            }
        };
        pending
            .await
            .map_err(|source| Error::LocaleLoad { locale, source })
    }

    fn locale_load(&self, locale: Locale) -> SharedLoad {
        let fetch = self.inner.source.fetch_locale(locale);
        let store = Arc::downgrade(&self.inner);
        settle_locale(store, locale, fetch).boxed().shared()
    }

    // =========================================================================
    // Namespace loading
    // =========================================================================

    /// Merges the given English namespaces, fetching the ones not loaded yet
    /// in parallel.
    ///
    /// On failure the error lists every namespace that failed; the others in
    /// the batch stay merged.
    pub async fn load_namespaces(&self, namespaces: &[Namespace]) -> Result<()> {
        let pending = {
            let mut state = self.inner.lock();
            let mut pending: Vec<(Namespace, SharedLoad)> = Vec::new();
            for &namespace in namespaces {
                if state.loaded_namespaces.contains(&namespace)
                    || pending.iter().any(|(ns, _)| *ns == namespace)
                {
                    continue;
                }
                let load = match state.namespaces_in_flight.get(&namespace) {
                    Some(load) => {
                        debug!(%namespace, "joining in-flight namespace load");
                        load.clone()
                    }
                    None => {
                        let load = self.namespace_load(namespace);
                        state.namespaces_in_flight.insert(namespace, load.clone());
                        load
                    }
                };
                pending.push((namespace, load));
            }
            pending
        };
        if pending.is_empty() {
            return Ok(());
        }

        let outcomes = join_all(
            pending
                .into_iter()
                .map(|(namespace, load)| async move { (namespace, load.await) }),
        )
        .await;

        let mut failed = Vec::new();
        let mut first_error = None;
        for (namespace, outcome) in outcomes {
            if let Err(err) = outcome {
                failed.push(namespace);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            None => Ok(()),
            Some(source) => Err(Error::NamespaceLoad { failed, source }),
        }
    }

    fn namespace_load(&self, namespace: Namespace) -> SharedLoad {
        let fetch = self.inner.source.fetch_namespace(namespace);
        let store = Arc::downgrade(&self.inner);
        settle_namespace(store, namespace, fetch).boxed().shared()
    }

    /// Loads the namespaces the page at `path` needs.
    pub async fn preload_for_route(&self, path: &str) -> Result<()> {
        let rest = paths::split_locale(path).map_or(path, |(_, rest)| rest);
        let namespaces = paths::route_namespaces(rest);
        self.load_namespaces(namespaces).await
    }

    // =========================================================================
    // Activation and state queries
    // =========================================================================

    /// Makes `locale` the lookup locale and returns the previous one.
    ///
    /// Fails with [`Error::LocaleNotLoaded`] if a non-default locale has not
    /// been loaded; the active locale is unchanged in that case.
    pub fn set_active_locale(&self, locale: Locale) -> Result<Locale> {
        let mut state = self.inner.lock();
        if !state.bundles.contains_key(&locale) {
            return Err(Error::LocaleNotLoaded(locale));
        }
        let previous = std::mem::replace(&mut state.active, locale);
        if previous != locale {
            debug!(from = %previous, to = %locale, "active locale changed");
        }
        Ok(previous)
    }

    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.inner.lock().active
    }

    #[must_use]
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.inner.lock().bundles.contains_key(&locale)
    }

    #[must_use]
    pub fn locale_state(&self, locale: Locale) -> LoadState {
        let state = self.inner.lock();
        if state.bundles.contains_key(&locale) {
            LoadState::Loaded
        } else if state.locales_in_flight.contains_key(&locale) {
            LoadState::Loading
        } else {
            LoadState::Unloaded
        }
    }

    #[must_use]
    pub fn is_namespace_loaded(&self, namespace: Namespace) -> bool {
        self.inner.lock().loaded_namespaces.contains(&namespace)
    }

    /// Loaded namespaces, sorted.
    #[must_use]
    pub fn loaded_namespaces(&self) -> Vec<Namespace> {
        let mut namespaces: Vec<_> = self
            .inner
            .lock()
            .loaded_namespaces
            .iter()
            .copied()
            .collect();
        namespaces.sort();
        namespaces
    }

    // =========================================================================
    // Translation queries
    // =========================================================================

    /// Looks `key` up in `locale` only, without fallback.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let state = self.inner.lock();
        state.bundles.get(&locale)?.get(key).map(str::to_string)
    }

    /// Resolves `key` in the active locale, then the default locale.
    fn resolve(&self, key: &str) -> Option<(Locale, String)> {
        let state = self.inner.lock();
        let active = state.active;
        [active, Locale::DEFAULT].into_iter().find_map(|locale| {
            let value = state.bundles.get(&locale)?.get(key)?;
            Some((active, value.to_string()))
        })
    }

    /// Translation of `key`, or the key itself when nothing matches.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.resolve(key)
            .map_or_else(|| key.to_string(), |(_, value)| value)
    }

    /// Translation of `key`, or `default` when nothing matches.
    #[must_use]
    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.resolve(key)
            .map_or_else(|| default.to_string(), |(_, value)| value)
    }

    /// Translation of `key` with `{{name}}` placeholders filled from `args`.
    #[must_use]
    pub fn t_args(&self, key: &str, args: &FluentArgs) -> String {
        match self.resolve(key) {
            Some((locale, template)) => format::interpolate(locale, &template, args),
            None => key.to_string(),
        }
    }

    /// Key coverage of a loaded locale against the default bundle as it
    /// stands now (including merged namespaces).
    #[must_use]
    pub fn coverage(&self, locale: Locale) -> Option<CoverageReport> {
        let state = self.inner.lock();
        let reference = state.bundles.get(&Locale::DEFAULT)?;
        let translated = state.bundles.get(&locale)?;
        Some(CoverageReport::compare(locale, reference, translated))
    }
}

async fn settle_locale(
    store: Weak<Inner>,
    locale: Locale,
    fetch: BoxFuture<'static, std::result::Result<Bundle, SourceError>>,
) -> std::result::Result<(), SourceError> {
    let result = fetch.await;
    let Some(inner) = store.upgrade() else {
        return result.map(|_| ());
    };
    let mut state = inner.lock();
    state.locales_in_flight.remove(&locale);
    match result {
        Ok(bundle) => {
            info!(%locale, keys = bundle.len(), "locale bundle merged");
            state.bundles.insert(locale, bundle);
            Ok(())
        }
        Err(err) => {
            warn!(%locale, error = %err, "locale bundle failed to load");
            Err(err)
        }
    }
}

async fn settle_namespace(
    store: Weak<Inner>,
    namespace: Namespace,
    fetch: BoxFuture<'static, std::result::Result<Bundle, SourceError>>,
) -> std::result::Result<(), SourceError> {
    let result = fetch.await;
    let Some(inner) = store.upgrade() else {
        return result.map(|_| ());
    };
    let mut state = inner.lock();
    state.namespaces_in_flight.remove(&namespace);
    match result {
        Ok(bundle) => {
            debug!(%namespace, keys = bundle.len(), "namespace merged");
            state
                .bundles
                .entry(Locale::DEFAULT)
                .or_default()
                .merge(bundle);
            state.loaded_namespaces.insert(namespace);
            Ok(())
        }
        Err(err) => {
            warn!(%namespace, error = %err, "namespace failed to load");
            Err(err)
        }
    }
}
