// SPDX-License-Identifier: MPL-2.0
//! Route gate that keeps rendering in step with the locale in the URL.
//!
//! [`LocaleRouter::activate`] is called on every navigation. Until it has
//! made the URL's locale active, [`LocaleRouter::outlet`] returns `None` and
//! nothing below the gate renders.
//!
//! Overlapping navigations are resolved by last-request-wins: when a load
//! finishes, its result is applied only if its locale is still the most
//! recently requested one. A superseded load is not cancelled; its bundle is
//! cached in the store for later.

use crate::domain::Locale;
use crate::error::Error;
use crate::i18n::events::{LocaleEvents, LocaleSwitch};
use crate::i18n::paths;
use crate::i18n::store::LocaleStore;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Outcome of one navigation through the gate.
#[derive(Debug, Clone)]
pub enum Activation {
    /// The URL has no supported locale; replace the history entry with `to`.
    Redirect { to: String },
    /// `locale` is active and descendants may render.
    Ready { locale: Locale },
    /// A newer navigation asked for `latest` before this one finished. The
    /// bundle for `requested` is cached, nothing else changed.
    Superseded {
        requested: Locale,
        latest: Option<Locale>,
    },
    /// Loading `requested` failed; rendering continues in `active`.
    Fallback {
        requested: Locale,
        active: Locale,
        error: Error,
    },
}

impl Activation {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Activation::Ready { .. })
    }
}

#[derive(Debug, Default)]
struct Gate {
    /// Locale of the most recent navigation.
    requested: Option<Locale>,
    /// Locale descendants last rendered with.
    rendered: Option<Locale>,
    ready: bool,
}

/// Locale gate at the root of the localized route tree.
#[derive(Debug)]
pub struct LocaleRouter {
    store: LocaleStore,
    events: LocaleEvents,
    gate: Mutex<Gate>,
}

impl LocaleRouter {
    pub fn new(store: LocaleStore) -> Self {
        Self::with_events(store, LocaleEvents::new())
    }

    pub fn with_events(store: LocaleStore, events: LocaleEvents) -> Self {
        Self {
            store,
            events,
            gate: Mutex::new(Gate::default()),
        }
    }

    fn gate(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    #[must_use]
    pub fn events(&self) -> &LocaleEvents {
        &self.events
    }

    /// Locale descendants render with, or `None` while a load is pending.
    #[must_use]
    pub fn outlet(&self) -> Option<Locale> {
        let gate = self.gate();
        gate.ready.then(|| self.store.active_locale())
    }

    /// Runs the gate for a navigation to `path`.
    ///
    /// Never fails: load errors become [`Activation::Fallback`]. When the
    /// locale is already active this completes without suspending.
    pub async fn activate(&self, path: &str) -> Activation {
        let Some(locale) = paths::locale_segment(path).and_then(Locale::from_code) else {
            let to = Locale::DEFAULT.root_path();
            info!(%path, %to, "no supported locale in path, redirecting");
            return Activation::Redirect { to };
        };

        {
            let mut gate = self.gate();
            gate.requested = Some(locale);
            if self.store.active_locale() == locale && self.store.has_locale(locale) {
                gate.ready = true;
                gate.rendered = Some(locale);
                return Activation::Ready { locale };
            }
            gate.ready = false;
        }

        debug!(%locale, "waiting for locale before rendering");
        let loaded = self.store.load_locale(locale).await;

        let mut gate = self.gate();
        if gate.requested != Some(locale) {
            debug!(%locale, latest = ?gate.requested, "ignoring superseded locale load");
            return Activation::Superseded {
                requested: locale,
                latest: gate.requested,
            };
        }

        let activated = loaded.and_then(|()| self.store.set_active_locale(locale));
        gate.ready = true;
        match activated {
            Ok(_) => {
                let previous = gate.rendered.replace(locale);
                drop(gate);
                if let Some(from) = previous.filter(|from| *from != locale) {
                    self.events.emit(LocaleSwitch::new(from, locale));
                }
                Activation::Ready { locale }
            }
            Err(error) => {
                let active = self.store.active_locale();
                if gate.rendered.is_none() {
                    gate.rendered = Some(active);
                }
                warn!(requested = %locale, %active, %error, "staying on previous locale");
                Activation::Fallback {
                    requested: locale,
                    active,
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{BundleSource, SourceError};
    use crate::domain::{Bundle, Namespace};
    use futures_util::future::{self, BoxFuture, FutureExt};
    use std::sync::Arc;

    struct FailingFrench;

    impl BundleSource for FailingFrench {
        fn fetch_locale(&self, locale: Locale) -> BoxFuture<'static, Result<Bundle, SourceError>> {
            let result = match locale {
                Locale::Fr => Err(SourceError::Request("offline".into())),
                _ => {
                    let mut bundle = Bundle::new();
                    bundle.insert("nav.home", locale.native_name());
                    Ok(bundle)
                }
            };
            future::ready(result).boxed()
        }

        fn fetch_namespace(
            &self,
            namespace: Namespace,
        ) -> BoxFuture<'static, Result<Bundle, SourceError>> {
            future::ready(Err(SourceError::NotFound(namespace.to_string()))).boxed()
        }
    }

    fn router() -> LocaleRouter {
        let mut en = Bundle::new();
        en.insert("nav.home", "Home");
        LocaleRouter::new(LocaleStore::new(Arc::new(FailingFrench), en))
    }

    #[test]
    fn active_locale_activates_without_suspending() {
        let router = router();
        let outcome = router
            .activate("/en/services")
            .now_or_never()
            .expect("no suspension for the active locale");
        assert!(matches!(outcome, Activation::Ready { locale: Locale::En }));
        assert_eq!(router.outlet(), Some(Locale::En));
    }

    #[tokio::test]
    async fn missing_segment_redirects_to_default_root() {
        let router = router();
        for path in ["/", "", "/xx/about", "/EN/about"] {
            match router.activate(path).await {
                Activation::Redirect { to } => assert_eq!(to, "/en"),
                other => panic!("expected redirect for {path:?}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn outlet_is_empty_before_first_activation() {
        let router = router();
        assert_eq!(router.outlet(), None);
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_previous_locale() {
        let router = router();
        assert!(router.activate("/de").await.is_ready());

        match router.activate("/fr/pricing").await {
            Activation::Fallback {
                requested, active, ..
            } => {
                assert_eq!(requested, Locale::Fr);
                assert_eq!(active, Locale::De);
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert_eq!(router.outlet(), Some(Locale::De));
        assert!(!router.store().has_locale(Locale::Fr));
    }

    #[tokio::test]
    async fn switch_event_skips_first_activation() {
        let router = router();
        let mut rx = router.events().subscribe();

        router.activate("/nl").await;
        assert!(rx.try_recv().is_err());

        router.activate("/de").await;
        let event = rx.try_recv().expect("switch event");
        assert_eq!((event.from, event.to), (Locale::Nl, Locale::De));

        router.activate("/de/about").await;
        assert!(rx.try_recv().is_err());
    }
}
