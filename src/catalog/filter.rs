use crate::catalog::geo::{distance_km, find_city};
use crate::catalog::types::{FilterCriteria, SearchHit};
use crate::models::{Coordinates, Listing};
use tracing::{debug, warn};

/// Run the catalog search: filter by every criterion, then order by distance
/// when the origin names a known city.
///
/// Listings without coordinates always pass the radius check and keep their
/// position in the output; only listings with coordinates are reordered.
pub fn search(listings: &[Listing], criteria: &FilterCriteria) -> Vec<SearchHit> {
    let origin = resolve_origin(criteria);

    let mut hits: Vec<SearchHit> = listings
        .iter()
        .filter(|listing| criteria.matches_attributes(listing))
        .filter_map(|listing| {
            let distance = match (origin, listing.coordinates) {
                (Some(from), Some(to)) => Some(distance_km(from, to)),
                _ => None,
            };

            if let (Some(d), Some(max)) = (distance, criteria.max_distance_km) {
                if d > max {
                    return None;
                }
            }

            Some(SearchHit {
                listing: listing.clone(),
                distance_km: distance,
            })
        })
        .collect();

    if origin.is_some() {
        sort_by_distance(&mut hits);
    }

    debug!(
        "Catalog search kept {} of {} listings",
        hits.len(),
        listings.len()
    );

    hits
}

/// Same as [`search`] but returns only the listings
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    search(listings, criteria)
        .into_iter()
        .map(|hit| hit.listing)
        .collect()
}

fn resolve_origin(criteria: &FilterCriteria) -> Option<Coordinates> {
    let name = criteria.origin.as_deref()?;
    match find_city(name) {
        Some(city) => Some(city.coordinates),
        None => {
            warn!("Unknown origin city '{}', ignoring location filter", name);
            None
        }
    }
}

/// Stable ascending sort of the hits that have a distance. Hits without one
/// stay in their slots.
fn sort_by_distance(hits: &mut [SearchHit]) {
    let slots: Vec<usize> = hits
        .iter()
        .enumerate()
        .filter(|(_, hit)| hit.distance_km.is_some())
        .map(|(i, _)| i)
        .collect();

    let mut located: Vec<SearchHit> = slots.iter().map(|&i| hits[i].clone()).collect();
    located.sort_by_key(|hit| hit.distance_km);

    for (slot, hit) in slots.into_iter().zip(located) {
        hits[slot] = hit;
    }
}
