//! Base trait for feature state objects.

/// Marker trait for one feature's slice of application state.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Cheap to snapshot (they are cloned out of the container on read)
pub trait FeatureState: Clone + PartialEq + Default + Send + Sync + 'static {}
