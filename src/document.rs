use slotmap::SlotMap;

use crate::engine::GeometryEngine;
use crate::error::VolumeError;
use crate::geometry::Geometry;
use crate::operations::{resolve_volume, VolumeMeasurement};
use crate::units::UnitSystem;

slotmap::new_key_type! {
    /// Unique identifier for an object in a document.
    pub struct ObjectId;
}

/// Arena that owns the objects of a model and its active unit system.
///
/// Selections are plain lists of [`ObjectId`]s held by the caller. An id
/// whose object has since been removed simply no longer resolves.
#[derive(Debug, Default)]
pub struct Document {
    objects: SlotMap<ObjectId, Geometry>,
    units: UnitSystem,
}

impl Document {
    /// Creates an empty document in the given unit system.
    #[must_use]
    pub fn new(units: UnitSystem) -> Self {
        Self {
            objects: SlotMap::with_key(),
            units,
        }
    }

    /// Returns the active linear unit system.
    #[must_use]
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Changes the active linear unit system without scaling geometry.
    pub fn set_units(&mut self, units: UnitSystem) {
        self.units = units;
    }

    /// Adds an object and returns its id.
    pub fn add(&mut self, geometry: impl Into<Geometry>) -> ObjectId {
        self.objects.insert(geometry.into())
    }

    /// Returns the object with the given id, if it still exists.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&Geometry> {
        self.objects.get(id)
    }

    /// Removes an object, returning it if it existed.
    pub fn remove(&mut self, id: ObjectId) -> Option<Geometry> {
        self.objects.remove(id)
    }

    /// Number of objects in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the document has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Looks up the objects of a selection, dropping ids that no longer exist.
    #[must_use]
    pub fn selected(&self, ids: &[ObjectId]) -> Vec<&Geometry> {
        let selected: Vec<&Geometry> = ids.iter().filter_map(|&id| self.get(id)).collect();
        if selected.len() != ids.len() {
            tracing::debug!(
                requested = ids.len(),
                found = selected.len(),
                "selection refers to removed objects"
            );
        }
        selected
    }

    /// Resolves the volume of a selection in the document's unit system.
    ///
    /// # Errors
    ///
    /// See [`resolve_volume`].
    pub fn resolve_volume<E>(
        &self,
        ids: &[ObjectId],
        engine: &E,
    ) -> Result<VolumeMeasurement, VolumeError>
    where
        E: GeometryEngine + ?Sized,
    {
        resolve_volume(&self.selected(ids), self.units, engine)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::PolyhedralEngine;
    use crate::geometry::OtherGeometry;
    use crate::math::Point3;

    fn cube(size: f64) -> OtherGeometry {
        OtherGeometry::Box {
            min: Point3::origin(),
            max: Point3::new(size, size, size),
        }
    }

    #[test]
    fn resolves_in_document_units() {
        let mut doc = Document::new(UnitSystem::Centimeters);
        let id = doc.add(cube(3.0));
        let volume = doc.resolve_volume(&[id], &PolyhedralEngine::new()).unwrap();
        assert!((volume.value - 27.0).abs() < 1e-9);
        assert_eq!(volume.units, UnitSystem::Centimeters);
    }

    #[test]
    fn removed_objects_drop_out_of_the_selection() {
        let mut doc = Document::new(UnitSystem::Meters);
        let a = doc.add(cube(1.0));
        let b = doc.add(cube(2.0));
        assert_eq!(
            doc.resolve_volume(&[a, b], &PolyhedralEngine::new()),
            Err(VolumeError::Ambiguous)
        );

        assert!(doc.remove(a).is_some());
        assert_eq!(doc.len(), 1);
        let volume = doc.resolve_volume(&[a, b], &PolyhedralEngine::new()).unwrap();
        assert!((volume.value - 8.0).abs() < 1e-9);

        assert!(doc.remove(b).is_some());
        assert!(doc.is_empty());
        assert_eq!(
            doc.resolve_volume(&[a, b], &PolyhedralEngine::new()),
            Err(VolumeError::NoSelection)
        );
    }

    #[test]
    fn unit_change_applies_to_later_measurements() {
        let mut doc = Document::default();
        let id = doc.add(cube(1.0));
        doc.set_units(UnitSystem::Feet);
        let volume = doc.resolve_volume(&[id], &PolyhedralEngine::new()).unwrap();
        assert_eq!(volume.units, UnitSystem::Feet);
    }
}
