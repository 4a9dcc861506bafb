//! 房间导航：两端房间都选中后才请求路径

use leptos::prelude::*;

use crate::components::icons::MapPin;
use crate::components::widgets::{EntitySelect, PageHeader};
use crate::hooks::facilities::{
    use_buildings, use_room_path, use_room_paths, use_rooms_by_building,
};

#[component]
pub fn NavigatorPage() -> impl IntoView {
    let buildings = use_buildings();

    let from_building = RwSignal::new(Option::<i64>::None);
    let to_building = RwSignal::new(Option::<i64>::None);
    let from_room = RwSignal::new(Option::<i64>::None);
    let to_room = RwSignal::new(Option::<i64>::None);

    let from_rooms = use_rooms_by_building(from_building.into());
    let to_rooms = use_rooms_by_building(to_building.into());

    // 两端齐备才构成一次路径查询
    let pair = Signal::derive(move || Some((from_room.get()?, to_room.get()?)));
    let path = use_room_path(pair);
    let known_paths = use_room_paths();

    let building_options = Signal::derive(move || {
        buildings
            .data
            .get()
            .map(|list| list.into_iter().map(|b| (b.id, b.name)).collect::<Vec<_>>())
    });
    let from_room_options = Signal::derive(move || {
        from_rooms
            .data
            .get()
            .map(|list| list.into_iter().map(|r| (r.id, r.name)).collect::<Vec<_>>())
    });
    let to_room_options = Signal::derive(move || {
        to_rooms
            .data
            .get()
            .map(|list| list.into_iter().map(|r| (r.id, r.name)).collect::<Vec<_>>())
    });

    view! {
        <div>
            <PageHeader title="Room navigator" subtitle="Step-by-step directions between rooms" />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-base">"From"</h3>
                        <EntitySelect label="Building" options=building_options value=from_building />
                        <EntitySelect label="Room" options=from_room_options value=from_room />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-base">"To"</h3>
                        <EntitySelect label="Building" options=building_options value=to_building />
                        <EntitySelect label="Room" options=to_room_options value=to_room />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-base gap-2">
                        <MapPin attr:class="h-5 w-5" /> "Directions"
                    </h3>
                    <Show
                        when=move || pair.get().is_some()
                        fallback=|| view! { <p class="text-sm text-base-content/50">"Pick a start and a destination room."</p> }
                    >
                        <Show
                            when=move || !path.loading.get()
                            fallback=|| view! { <span class="loading loading-spinner"></span> }
                        >
                            <Show when=move || path.error.get().is_some()>
                                <div class="alert alert-error text-sm py-2">
                                    <span>{move || path.error.get().map(|e| e.message)}</span>
                                </div>
                            </Show>
                            <ol class="list-decimal list-inside space-y-1 text-sm">
                                <For
                                    each=move || {
                                        path.data
                                            .get()
                                            .map(|p| p.steps)
                                            .unwrap_or_default()
                                            .into_iter()
                                            .enumerate()
                                            .collect::<Vec<_>>()
                                    }
                                    key=|(i, _)| *i
                                    children=move |(_, step)| view! { <li>{step}</li> }
                                />
                            </ol>
                        </Show>
                    </Show>
                </div>
            </div>

            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h3 class="card-title text-base">"Mapped connections"</h3>
                    <Show
                        when=move || !known_paths.loading.get()
                        fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                    >
                        <ul class="text-sm">
                            <For
                                each=move || known_paths.data.get().unwrap_or_default()
                                key=|p| (p.from_room_id, p.to_room_id)
                                children=move |p| {
                                    view! {
                                        <li class="py-1">
                                            {format!(
                                                "Room #{} to room #{} ({} steps)",
                                                p.from_room_id,
                                                p.to_room_id,
                                                p.steps.len(),
                                            )}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </div>
    }
}
