use crate::geo::GeoPoint;
use crate::mood::{Mood, MoodEvent};

#[derive(Debug, Clone, PartialEq)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    /// Rounded share of all events in the region.
    pub percent: u32,
}

/// Mood distribution of the known events around a point on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalStats {
    pub center: GeoPoint,
    pub radius_deg: f64,
    pub total: usize,
    /// In [`Mood::ALL`] order; moods nobody reported are left out.
    pub shares: Vec<MoodShare>,
}

impl RegionalStats {
    pub fn around<'a>(
        center: GeoPoint,
        radius_deg: f64,
        events: impl IntoIterator<Item = &'a MoodEvent>,
    ) -> Self {
        let mut counts = [0usize; Mood::ALL.len()];
        for event in events {
            if center.angular_distance_deg(event.geo_point) <= radius_deg {
                if let Some(slot) = Mood::ALL.iter().position(|m| *m == event.mood) {
                    counts[slot] += 1;
                }
            }
        }

        let total: usize = counts.iter().sum();
        let shares = Mood::ALL
            .into_iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(mood, count)| MoodShare {
                mood,
                count,
                percent: ((count as f64 / total as f64) * 100.0).round() as u32,
            })
            .collect();

        Self {
            center,
            radius_deg,
            total,
            shares,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
