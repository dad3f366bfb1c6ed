//! Type-keyed hub wiring module clients together.
//!
//! Provider modules publish an implementation of their public trait once;
//! consumers look it up by the trait type alone, without naming the provider.
//! Looking up on every use keeps the binding late, so swapping a provider is
//! visible to the next lookup.
//!
//! Entries are `Arc<T>` boxed as `Box<dyn Any + Send + Sync>` behind a
//! `parking_lot::RwLock`, keyed by `type_name::<T>()` (trait objects
//! included). Re-registering a type replaces the stored value while `Arc`s
//! already handed out keep working. `remove` and `clear` exist for tests and
//! teardown flows.

use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// Stable type key for trait objects, based on fully-qualified `type_name::<T>()`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    #[inline]
    fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(std::any::type_name::<T>())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientHubError {
    #[error("missing dependency: no client registered for type={type_key:?}")]
    MissingDependency { type_key: TypeKey },

    #[error("type mismatch in hub for type={type_key:?}")]
    TypeMismatch { type_key: TypeKey },
}

type AnyClient = Box<dyn Any + Send + Sync>;

/// Type-keyed registry of module clients.
#[derive(Default)]
pub struct ClientHub {
    map: RwLock<HashMap<TypeKey, AnyClient>>,
}

impl ClientHub {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `client` under the type `T`, usually a trait object such as
    /// `dyn CatModelApi`. Replaces any previous registration for `T`.
    pub fn register<T>(&self, client: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.map.write().insert(TypeKey::of::<T>(), Box::new(client));
    }

    /// Look up the client registered under `T`.
    ///
    /// # Errors
    /// Returns `ClientHubError::MissingDependency` when nothing is registered
    /// under `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, ClientHubError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        let map = self.map.read();
        let Some(stored) = map.get(&key) else {
            return Err(ClientHubError::MissingDependency { type_key: key });
        };

        // The entry for `T` only ever holds an `Arc<T>`.
        stored
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| ClientHubError::TypeMismatch { type_key: key })
    }

    /// Unregister `T`, returning the client that was stored.
    pub fn remove<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let removed = self.map.write().remove(&TypeKey::of::<T>())?;
        removed.downcast::<Arc<T>>().ok().map(|client| *client)
    }

    /// Drop every registration.
    pub fn clear(&self) {
        self.map.write().clear();
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    trait FeederApi: Send + Sync + fmt::Debug {
        fn portions(&self) -> usize;
    }

    #[derive(Debug)]
    struct FixedFeeder(usize);
    impl FeederApi for FixedFeeder {
        fn portions(&self) -> usize {
            self.0
        }
    }

    trait GroomerApi: Send + Sync {
        fn tool(&self) -> &str;
    }

    struct FixedGroomer(&'static str);
    impl GroomerApi for FixedGroomer {
        fn tool(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn register_then_get_resolves_the_trait_object() {
        let hub = ClientHub::new();
        let feeder: Arc<dyn FeederApi> = Arc::new(FixedFeeder(3));
        hub.register::<dyn FeederApi>(feeder.clone());

        let got = hub.get::<dyn FeederApi>().unwrap();
        assert_eq!(got.portions(), 3);
        assert!(Arc::ptr_eq(&feeder, &got), "Lookup must hand back the registered client");
    }

    #[test]
    fn lookups_share_one_underlying_client() {
        let hub = ClientHub::new();
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(3)));

        let first = hub.get::<dyn FeederApi>().unwrap();
        let second = hub.get::<dyn FeederApi>().unwrap();

        assert!(Arc::ptr_eq(&first, &second), "Lookups must not mint new clients");
    }

    #[test]
    fn re_registration_replaces_the_client() {
        let hub = ClientHub::new();
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(1)));
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(2)));

        let got = hub.get::<dyn FeederApi>().unwrap();
        assert_eq!(got.portions(), 2, "Later registration wins");
    }

    #[test]
    fn handed_out_arcs_survive_re_registration() {
        let hub = ClientHub::new();
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(1)));
        let old = hub.get::<dyn FeederApi>().unwrap();

        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(2)));

        assert_eq!(old.portions(), 1, "Held Arc keeps the value it resolved to");
        assert_eq!(hub.get::<dyn FeederApi>().unwrap().portions(), 2);
    }

    #[test]
    fn get_without_registration_is_a_missing_dependency() {
        let hub = ClientHub::new();

        let err = hub.get::<dyn FeederApi>().unwrap_err();
        match err {
            ClientHubError::MissingDependency { type_key } => {
                let printed = format!("{type_key:?}");
                assert!(printed.contains("FeederApi"), "Key should name the trait, got {printed}");
            }
            other => panic!("Expected MissingDependency, got {other:?}"),
        }
    }

    #[test]
    fn remove_unregisters_and_returns_the_client() {
        let hub = ClientHub::new();
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(5)));

        let removed = hub.remove::<dyn FeederApi>().unwrap();
        assert_eq!(removed.portions(), 5, "Removed client stays usable");
        assert!(hub.get::<dyn FeederApi>().is_err(), "Entry must be gone after removal");
    }

    #[test]
    fn remove_without_registration_returns_none() {
        let hub = ClientHub::new();
        assert!(hub.remove::<dyn FeederApi>().is_none());
    }

    #[test]
    fn clear_empties_the_hub() {
        let hub = ClientHub::new();
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(1)));
        hub.register::<dyn GroomerApi>(Arc::new(FixedGroomer("brush")));
        assert_eq!(hub.len(), 2);

        hub.clear();

        assert!(hub.is_empty());
        assert!(hub.get::<dyn FeederApi>().is_err());
        assert!(hub.get::<dyn GroomerApi>().is_err());
    }

    #[test]
    fn distinct_traits_occupy_distinct_slots() {
        let hub = ClientHub::new();
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(9)));
        hub.register::<dyn GroomerApi>(Arc::new(FixedGroomer("comb")));

        assert_eq!(hub.get::<dyn FeederApi>().unwrap().portions(), 9);
        assert_eq!(hub.get::<dyn GroomerApi>().unwrap().tool(), "comb");
    }

    #[test]
    fn len_tracks_registrations_not_overwrites() {
        let hub = ClientHub::new();
        assert_eq!(hub.len(), 0);
        assert!(hub.is_empty());

        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(1)));
        assert_eq!(hub.len(), 1);

        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(2)));
        assert_eq!(hub.len(), 1, "Overwriting must not grow the map");

        hub.remove::<dyn FeederApi>();
        assert!(hub.is_empty());
    }

    #[test]
    fn concurrent_registration_and_lookup_stay_consistent() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let hub = Arc::new(ClientHub::new());
        hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(0)));

        let lookups = Arc::new(AtomicUsize::new(0));
        let mut handles = Vec::new();
        for portions in 0..10 {
            let hub = hub.clone();
            let lookups = lookups.clone();
            handles.push(std::thread::spawn(move || {
                hub.register::<dyn FeederApi>(Arc::new(FixedFeeder(portions)));
                if let Ok(client) = hub.get::<dyn FeederApi>() {
                    let _ = client.portions();
                    lookups.fetch_add(1, Ordering::SeqCst);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(lookups.load(Ordering::SeqCst), 10, "Every thread must resolve a client");
        assert!(
            hub.get::<dyn FeederApi>().unwrap().portions() < 10,
            "Winner must be one of the registered feeders"
        );
    }
}
