//! 场地资源钩子：楼宇 / 房间 / 设备 / 可用性 / 导航路径

use leptos::prelude::*;

use crate::api::endpoints::{Endpoint, Entity};
use crate::models::{
    Building, BuildingPayload, Equipment, EquipmentPayload, Room, RoomAvailability, RoomPath,
    RoomPayload,
};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

// =========================================================
// 查询
// =========================================================

pub fn use_buildings() -> QueryHandle<Vec<Building>> {
    use_list_query(ResourceTag::Buildings, Endpoint::List(Entity::Buildings))
}

/// 某楼的房间；楼未选中时不发请求
pub fn use_rooms_by_building(building_id: Signal<Option<i64>>) -> QueryHandle<Vec<Room>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(building_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Rooms, id),
                Endpoint::RoomsByBuilding(id),
            )
        })
    }))
}

/// 某房间的设备；房间未选中时不发请求
pub fn use_equipment_by_room(room_id: Signal<Option<i64>>) -> QueryHandle<Vec<Equipment>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(room_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Equipment, id),
                Endpoint::EquipmentByRoom(id),
            )
        })
    }))
}

pub fn use_room_availability(
    room_id: Signal<Option<i64>>,
) -> QueryHandle<Vec<RoomAvailability>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(room_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::RoomAvailability, id),
                Endpoint::RoomAvailability(id),
            )
        })
    }))
}

/// 全部已知导航路径
pub fn use_room_paths() -> QueryHandle<Vec<RoomPath>> {
    use_query(Signal::derive(move || {
        Some(QuerySpec::new(
            QueryKey::list(ResourceTag::RoomPaths),
            Endpoint::RoomPaths,
        ))
    }))
}

/// 房间导航：两端都选中才查询
pub fn use_room_path(route: Signal<Option<(i64, i64)>>) -> QueryHandle<RoomPath> {
    use_query(Signal::derive(move || {
        QuerySpec::when(route.get(), |(from, to)| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::RoomPaths, format!("{}->{}", from, to)),
                Endpoint::RoomPath { from, to },
            )
        })
    }))
}

// =========================================================
// 变更
// =========================================================

#[derive(Clone, Copy)]
pub struct FacilityActions {
    ctx: MutationCtx,
}

pub fn use_facility_actions() -> FacilityActions {
    FacilityActions {
        ctx: use_mutation_ctx(),
    }
}

impl FacilityActions {
    pub fn create_building(&self, payload: BuildingPayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Buildings),
            payload,
            MutationPlan::new(&[ResourceTag::Buildings], "Building created")
                .with_patch(PatchPlan::Insert(ResourceTag::Buildings)),
        );
    }

    pub fn update_building(&self, id: i64, payload: BuildingPayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Buildings, id),
            payload,
            MutationPlan::new(&[ResourceTag::Buildings], "Building updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Buildings)),
        );
    }

    pub fn delete_building(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Buildings, id),
            MutationPlan::new(&[ResourceTag::Buildings], "Building deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Buildings, id)),
        );
    }

    // 房间变更经由失效图同时波及可用性与导航路径缓存
    pub fn create_room(&self, payload: RoomPayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Rooms),
            payload,
            MutationPlan::new(&[ResourceTag::Rooms], "Room created"),
        );
    }

    pub fn update_room(&self, id: i64, payload: RoomPayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Rooms, id),
            payload,
            MutationPlan::new(&[ResourceTag::Rooms], "Room updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Rooms)),
        );
    }

    pub fn delete_room(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Rooms, id),
            MutationPlan::new(&[ResourceTag::Rooms], "Room deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Rooms, id)),
        );
    }

    pub fn create_equipment(&self, payload: EquipmentPayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Equipment),
            payload,
            MutationPlan::new(&[ResourceTag::Equipment], "Equipment created"),
        );
    }

    pub fn update_equipment(&self, id: i64, payload: EquipmentPayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Equipment, id),
            payload,
            MutationPlan::new(&[ResourceTag::Equipment], "Equipment updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Equipment)),
        );
    }

    pub fn delete_equipment(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Equipment, id),
            MutationPlan::new(&[ResourceTag::Equipment], "Equipment deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Equipment, id)),
        );
    }
}
