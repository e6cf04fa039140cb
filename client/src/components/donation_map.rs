//! Leaflet map of available donations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map is created lazily once the container div is attached, then kept
//! for the life of the component. Marker set and view are synced from
//! signals; clicking a marker reports the donation id through `on_select`.

use domain::Donation;
use leptos::prelude::*;

use crate::util::leaflet::MapView;

#[component]
pub fn DonationMap(
    #[prop(into)] donations: Signal<Vec<Donation>>,
    #[prop(into)] map_view: Signal<MapView>,
    on_select: Callback<String>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::leaflet::{LeafletView, marker_points};

        // Dropped, and the Leaflet map removed, when this component's owner is disposed.
        let leaflet = StoredValue::new_local(None::<LeafletView>);

        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            let points = donations.with(|d| marker_points(d));
            leaflet.update_value(|slot| {
                let map = slot.get_or_insert_with(|| LeafletView::mount(&el, map_view.get_untracked()));
                map.set_markers(points, move |id| on_select.run(id));
            });
        });

        Effect::new(move || {
            let next = map_view.get();
            leaflet.with_value(|slot| {
                if let Some(map) = slot {
                    map.set_view(next);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (donations, map_view, on_select);

    view! { <div class="donation-map" node_ref=container></div> }
}
