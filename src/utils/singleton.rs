//! Process-wide, lazily created instances
//!
//! [`instance`] hands out one `&'static T` per type. The per-type cell is
//! found in a registry guarded by an `RwLock`: looked up under the read lock,
//! and looked up again after taking the write lock, so two threads racing on
//! first access never create two cells. The value itself is built by a
//! `OnceLock`, outside the registry lock, so a constructor may request other
//! singletons.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

type Cells = HashMap<TypeId, &'static (dyn Any + Send + Sync)>;

fn registry() -> &'static RwLock<Cells> {
    static REGISTRY: OnceLock<RwLock<Cells>> = OnceLock::new();
    REGISTRY.get_or_init(Default::default)
}

fn find<T: Send + Sync + 'static>(cells: &Cells) -> Option<&'static OnceLock<T>> {
    cells
        .get(&TypeId::of::<T>())
        .copied()
        .and_then(|cell| cell.downcast_ref::<OnceLock<T>>())
}

fn cell<T: Send + Sync + 'static>() -> &'static OnceLock<T> {
    if let Some(cell) = find::<T>(&registry().read().unwrap_or_else(PoisonError::into_inner)) {
        return cell;
    }

    let mut cells = registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(cell) = find::<T>(&cells) {
        return cell;
    }

    let cell: &'static OnceLock<T> = Box::leak(Box::new(OnceLock::new()));
    cells.insert(TypeId::of::<T>(), cell);
    cell
}

/// The process-wide instance of `T`, created with `T::default()` on first use
pub fn instance<T: Default + Send + Sync + 'static>() -> &'static T {
    cell::<T>().get_or_init(|| {
        tracing::debug!("Creating singleton {}", std::any::type_name::<T>());
        T::default()
    })
}

/// Types with a single process-wide instance
///
/// ```
/// use utilkit::utils::singleton::Singleton;
///
/// #[derive(Default)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// impl Singleton for Settings {}
///
/// assert!(std::ptr::eq(Settings::instance(), Settings::instance()));
/// assert!(!Settings::instance().verbose);
/// ```
pub trait Singleton: Default + Send + Sync + 'static {
    fn instance() -> &'static Self {
        instance::<Self>()
    }
}
