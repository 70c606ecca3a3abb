//! Room composition: floor, walls, baseboards, gltf props, lighting.
//!
//! Everything here is declarative placement data spawned once at startup;
//! nothing in the room moves after that.

mod entities;
mod startup_systems;
mod systems;

use bevy::prelude::*;

/// Nested configuration for the room scene.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct RoomConfig {
    /// Floor/wall/baseboard geometry and textures.
    pub surfaces: SurfaceSettings,
    /// Ambient and key light levels.
    pub lighting: LightSettings,
    /// Background clear color.
    pub clear_color: Color,
}

/// Static geometry panels: extents, offsets, and texture paths.
#[derive(Clone, Debug, Reflect)]
pub struct SurfaceSettings {
    /// Side length of the square floor plane.
    pub floor_size: f32,
    /// Floor height.
    pub floor_y: f32,
    /// Wall width and height.
    pub wall_size: Vec2,
    /// Distance from the room center to each wall.
    pub wall_offset: f32,
    /// Height of the wall centers.
    pub wall_center_y: f32,
    /// Baseboard cuboid dimensions (length, height, thickness).
    pub baseboard_size: Vec3,
    /// Height of the baseboard centers.
    pub baseboard_y: f32,
    /// Distance from the room center to each baseboard.
    pub baseboard_offset: f32,
    /// Baseboard color.
    pub baseboard_color: Color,
    /// Asset path of the floor texture.
    pub floor_texture: String,
    /// Asset path of the wall texture.
    pub wall_texture: String,
}

/// Fixed lights standing in for the original's environment lighting.
#[derive(Clone, Debug, Reflect)]
pub struct LightSettings {
    /// Ambient light brightness.
    pub ambient_brightness: f32,
    /// Key light illuminance (lux).
    pub key_illuminance: f32,
    /// Direction the key light shines along.
    pub key_direction: Vec3,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            surfaces: SurfaceSettings {
                floor_size: 30.0,
                floor_y: -3.6,
                wall_size: Vec2::new(30.0, 20.0),
                wall_offset: 15.0,
                wall_center_y: 6.4,
                baseboard_size: Vec3::new(30.0, 1.0, 0.5),
                baseboard_y: -3.0,
                baseboard_offset: 14.75,
                baseboard_color: Color::srgb_u8(170, 170, 170),
                floor_texture: "textures/woodenfloor.jpg".into(),
                wall_texture: "textures/wall.jpg".into(),
            },
            lighting: LightSettings {
                ambient_brightness: 300.0,
                key_illuminance: 4_000.0,
                key_direction: Vec3::new(-0.5, -1.0, -0.5),
            },
            clear_color: Color::WHITE,
        }
    }
}

/// Room plugin: static scene spawn at startup, asset status logging after.
pub struct RoomPlugin(pub RoomConfig);

impl Plugin for RoomPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<RoomConfig>()
            .register_type::<entities::Prop>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .init_resource::<entities::PendingAssets>()
            .add_systems(
                Startup,
                (startup_systems::spawn_room, startup_systems::spawn_props),
            )
            .add_systems(Update, systems::report_asset_status);
    }
}
