//! Point markers placed by clicking or imported from files.
//!
//! Markers live in their own collection and never interact with drawings.

use crate::geo::GeoPoint;
use crate::util::{GeoBounds, IdSequence};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a marker, unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// A titled point on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub position: GeoPoint,
    pub title: String,
    pub description: String,
}

/// Marker content before an identifier is assigned (e.g. parsed from a file).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMarker {
    pub position: GeoPoint,
    pub title: String,
    pub description: String,
}

/// Ordered marker collection with per-id deletion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    #[serde(skip)]
    ids: IdSequence,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker for a map click, titled `Marker N` where N is the new count.
    pub fn add_at(&mut self, position: GeoPoint) -> &Marker {
        let title = format!("Marker {}", self.markers.len() + 1);
        let description = format!("Location: {position}");
        self.push(NewMarker {
            position,
            title,
            description,
        })
    }

    /// Appends every marker at once and returns their new ids.
    pub fn extend(&mut self, batch: Vec<NewMarker>) -> Vec<MarkerId> {
        batch
            .into_iter()
            .map(|new_marker| self.push(new_marker).id)
            .collect()
    }

    /// Removes a marker; `None` if the id is unknown.
    pub fn delete(&mut self, id: MarkerId) -> Option<Marker> {
        let index = self.markers.iter().position(|marker| marker.id == id)?;
        Some(self.markers.remove(index))
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn count(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Box covering the given markers, for fitting the view after an import.
    pub fn bounds_of(&self, ids: &[MarkerId]) -> Option<GeoBounds> {
        let positions: Vec<GeoPoint> = ids
            .iter()
            .filter_map(|id| self.get(*id))
            .map(|marker| marker.position)
            .collect();
        GeoBounds::from_points(&positions)
    }

    fn push(&mut self, new_marker: NewMarker) -> &Marker {
        let marker = Marker {
            id: MarkerId(self.ids.next_id()),
            position: new_marker.position,
            title: new_marker.title,
            description: new_marker.description,
        };
        self.markers.push(marker);
        &self.markers[self.markers.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_markers_are_numbered_and_described() {
        let mut store = MarkerStore::new();
        store.add_at(GeoPoint::new(51.505, -0.09));
        let second = store.add_at(GeoPoint::new(1.0, 2.0)).clone();

        assert_eq!(second.title, "Marker 2");
        assert_eq!(second.description, "Location: 1.000000, 2.000000");
    }

    #[test]
    fn ids_stay_unique_across_deletes_and_bulk_adds() {
        let mut store = MarkerStore::new();
        let first = store.add_at(GeoPoint::new(0.0, 0.0)).id;
        assert!(store.delete(first).is_some());
        assert!(store.delete(first).is_none());

        let batch = (0..3)
            .map(|i| NewMarker {
                position: GeoPoint::new(i as f64, 0.0),
                title: format!("Imported {}", i + 1),
                description: "Imported from file".to_string(),
            })
            .collect();
        let ids = store.extend(batch);

        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&first));
        let mut sorted = ids.clone();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);

        let bounds = store.bounds_of(&ids).expect("bounds");
        assert_eq!(bounds.south, 0.0);
        assert_eq!(bounds.north, 2.0);
    }
}
