//! 场地管理：楼宇 → 房间 → 设备 的级联选择，附房间可用性

use leptos::prelude::*;

use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::widgets::{PageHeader, TextField};
use crate::hooks::facilities::{
    use_buildings, use_equipment_by_room, use_facility_actions, use_room_availability,
    use_rooms_by_building,
};
use crate::models::{BuildingPayload, EquipmentPayload, RoomPayload};

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    let actions = use_facility_actions();

    let selected_building = RwSignal::new(Option::<i64>::None);
    let selected_room = RwSignal::new(Option::<i64>::None);
    let editing_building = RwSignal::new(Option::<i64>::None);
    let editing_room = RwSignal::new(Option::<i64>::None);

    let buildings = use_buildings();
    let rooms = use_rooms_by_building(selected_building.into());
    let equipment = use_equipment_by_room(selected_room.into());
    let availability = use_room_availability(selected_room.into());

    let building_name = RwSignal::new(String::new());
    let building_code = RwSignal::new(String::new());
    let room_name = RwSignal::new(String::new());
    let room_capacity = RwSignal::new(String::new());
    let equipment_name = RwSignal::new(String::new());

    let add_building = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if building_name.get().is_empty() || building_code.get().is_empty() {
            return;
        }
        let payload = BuildingPayload {
            name: building_name.get_untracked(),
            code: building_code.get_untracked(),
        };
        match editing_building.get() {
            Some(id) => {
                actions.update_building(id, payload);
                editing_building.set(None);
            }
            None => actions.create_building(payload),
        }
        building_name.set(String::new());
        building_code.set(String::new());
    };

    let add_room = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(building_id) = selected_building.get() else {
            return;
        };
        if room_name.get().is_empty() {
            return;
        }
        let payload = RoomPayload {
            name: room_name.get_untracked(),
            building_id,
            capacity: room_capacity.get_untracked().parse().ok(),
            floor: None,
        };
        match editing_room.get() {
            Some(id) => {
                actions.update_room(id, payload);
                editing_room.set(None);
            }
            None => actions.create_room(payload),
        }
        room_name.set(String::new());
        room_capacity.set(String::new());
    };

    let add_equipment = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(room_id) = selected_room.get() else {
            return;
        };
        if equipment_name.get().is_empty() {
            return;
        }
        actions.create_equipment(EquipmentPayload {
            name: equipment_name.get_untracked(),
            room_id,
            working: true,
        });
        equipment_name.set(String::new());
    };

    view! {
        <div>
            <PageHeader title="Facilities" subtitle="Buildings, rooms and equipment" />

            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                // ---- 楼宇 ----
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-base">"Buildings"</h3>
                        <ul class="menu p-0">
                            <For
                                each=move || buildings.data.get().unwrap_or_default()
                                key=|b| b.id
                                children=move |b| {
                                    let id = b.id;
                                    let active = move || selected_building.get() == Some(id);
                                    view! {
                                        <li>
                                            <a
                                                class=move || if active() { "active" } else { "" }
                                                on:click=move |_| {
                                                    selected_building.set(Some(id));
                                                    // 换楼后房间选择与房间编辑态失效
                                                    selected_room.set(None);
                                                    editing_room.set(None);
                                                }
                                            >
                                                <span class="flex-1">{b.name.clone()}</span>
                                                <span class="badge badge-ghost badge-sm">{b.code.clone()}</span>
                                                <button
                                                    class="btn btn-ghost btn-xs"
                                                    on:click={
                                                        let name = b.name.clone();
                                                        let code = b.code.clone();
                                                        move |ev: leptos::web_sys::MouseEvent| {
                                                            ev.stop_propagation();
                                                            editing_building.set(Some(id));
                                                            building_name.set(name.clone());
                                                            building_code.set(code.clone());
                                                        }
                                                    }
                                                >
                                                    <Pencil attr:class="h-3 w-3" />
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        actions.delete_building(id);
                                                    }
                                                >
                                                    <Trash2 attr:class="h-3 w-3" />
                                                </button>
                                            </a>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                        <form class="flex flex-col gap-2 mt-2" on:submit=add_building>
                            <TextField label="Name" placeholder="Science Hall" value=building_name />
                            <TextField label="Code" placeholder="SCI" value=building_code />
                            <button class="btn btn-primary btn-sm gap-1">
                                <Plus attr:class="h-4 w-4" />
                                {move || if editing_building.get().is_some() { "Save building" } else { "Add building" }}
                            </button>
                        </form>
                    </div>
                </div>

                // ---- 房间 ----
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-base">"Rooms"</h3>
                        <Show
                            when=move || selected_building.get().is_some()
                            fallback=|| view! { <p class="text-sm text-base-content/50">"Select a building first."</p> }
                        >
                            <ul class="menu p-0">
                                <For
                                    each=move || rooms.data.get().unwrap_or_default()
                                    key=|r| r.id
                                    children=move |r| {
                                        let id = r.id;
                                        let active = move || selected_room.get() == Some(id);
                                        let capacity = r
                                            .capacity
                                            .map(|c| format!("{} seats", c))
                                            .unwrap_or_default();
                                        view! {
                                            <li>
                                                <a
                                                    class=move || if active() { "active" } else { "" }
                                                    on:click=move |_| selected_room.set(Some(id))
                                                >
                                                    <span class="flex-1">{r.name.clone()}</span>
                                                    <span class="text-xs text-base-content/50">{capacity}</span>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click={
                                                            let name = r.name.clone();
                                                            let cap = r.capacity;
                                                            move |ev: leptos::web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                editing_room.set(Some(id));
                                                                room_name.set(name.clone());
                                                                room_capacity.set(
                                                                    cap.map(|c| c.to_string()).unwrap_or_default(),
                                                                );
                                                            }
                                                        }
                                                    >
                                                        <Pencil attr:class="h-3 w-3" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            actions.delete_room(id);
                                                        }
                                                    >
                                                        <Trash2 attr:class="h-3 w-3" />
                                                    </button>
                                                </a>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                            <form class="flex flex-col gap-2 mt-2" on:submit=add_room>
                                <TextField label="Name" placeholder="SCI-101" value=room_name />
                                <TextField label="Capacity" placeholder="40" value=room_capacity kind="number" />
                                <button class="btn btn-primary btn-sm gap-1">
                                    <Plus attr:class="h-4 w-4" />
                                    {move || if editing_room.get().is_some() { "Save room" } else { "Add room" }}
                                </button>
                            </form>
                        </Show>
                    </div>
                </div>

                // ---- 设备与可用性 ----
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-base">"Room details"</h3>
                        <Show
                            when=move || selected_room.get().is_some()
                            fallback=|| view! { <p class="text-sm text-base-content/50">"Select a room first."</p> }
                        >
                            <h4 class="font-medium text-sm mt-2">"Equipment"</h4>
                            <ul class="text-sm">
                                <For
                                    each=move || equipment.data.get().unwrap_or_default()
                                    key=|e| e.id
                                    children=move |e| {
                                        let id = e.id;
                                        let working = e.working;
                                        let toggle_working = {
                                            let name = e.name.clone();
                                            let room_id = e.room_id;
                                            move |_| {
                                                // 徽标即开关：点一下翻转在用/故障状态
                                                actions.update_equipment(
                                                    id,
                                                    EquipmentPayload {
                                                        name: name.clone(),
                                                        room_id,
                                                        working: !working,
                                                    },
                                                );
                                            }
                                        };
                                        view! {
                                            <li class="flex items-center gap-2 py-1">
                                                <button
                                                    class=if working { "badge badge-success badge-xs" } else { "badge badge-error badge-xs" }
                                                    title=if working { "Mark as broken" } else { "Mark as working" }
                                                    on:click=toggle_working
                                                ></button>
                                                <span class="flex-1">{e.name.clone()}</span>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| actions.delete_equipment(id)
                                                >
                                                    <Trash2 attr:class="h-3 w-3" />
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                            <form class="flex gap-2 items-end" on:submit=add_equipment>
                                <div class="flex-1">
                                    <TextField label="New equipment" placeholder="Projector" value=equipment_name />
                                </div>
                                <button class="btn btn-primary btn-sm">
                                    <Plus attr:class="h-4 w-4" />
                                </button>
                            </form>

                            <h4 class="font-medium text-sm mt-4">"Availability"</h4>
                            <Show
                                when=move || !availability.loading.get()
                                fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                            >
                                <ul class="text-sm">
                                    <For
                                        each=move || availability.data.get().unwrap_or_default()
                                        key=|a| a.day.clone()
                                        children=move |a| {
                                            view! {
                                                <li class="py-1">
                                                    <span class="font-medium">{a.day.clone()}</span>
                                                    ": "
                                                    {a.free_slots.join(", ")}
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </Show>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
