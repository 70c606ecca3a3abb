use std::f32::consts::FRAC_PI_2;

use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use super::RoomConfig;
use super::entities::{PROPS, PendingAssets, Prop};

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns the floor, walls, baseboards, and lights.
pub fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    server: Res<AssetServer>,
    mut pending: ResMut<PendingAssets>,
    cfg: Res<RoomConfig>,
) {
    let s = &cfg.surfaces;

    let floor_texture: Handle<Image> = server.load(s.floor_texture.clone());
    let wall_texture: Handle<Image> = server.load(s.wall_texture.clone());
    pending
        .pending
        .push(("floor texture".into(), floor_texture.clone().untyped()));
    pending
        .pending
        .push(("wall texture".into(), wall_texture.clone().untyped()));

    let floor_material = materials.add(StandardMaterial {
        base_color_texture: Some(floor_texture),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color_texture: Some(wall_texture),
        perceptual_roughness: 0.95,
        ..default()
    });
    let baseboard_material = materials.add(StandardMaterial {
        base_color: s.baseboard_color,
        ..default()
    });

    // Floor
    let floor_mesh = meshes.add(
        Plane3d::default()
            .mesh()
            .size(s.floor_size, s.floor_size)
            .build(),
    );
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(floor_mesh),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, s.floor_y, 0.0),
    ));

    // Walls: an XZ plane stood upright faces +Z (the back wall); an extra
    // yaw turns the right wall to face the room from +X.
    let wall_mesh = meshes.add(
        Plane3d::default()
            .mesh()
            .size(s.wall_size.x, s.wall_size.y)
            .build(),
    );
    let upright = Quat::from_rotation_x(FRAC_PI_2);
    commands.spawn((
        Name::new("Back Wall"),
        Mesh3d(wall_mesh.clone()),
        MeshMaterial3d(wall_material.clone()),
        Transform::from_xyz(0.0, s.wall_center_y, -s.wall_offset).with_rotation(upright),
    ));
    commands.spawn((
        Name::new("Right Wall"),
        Mesh3d(wall_mesh),
        MeshMaterial3d(wall_material),
        Transform::from_xyz(s.wall_offset, s.wall_center_y, 0.0)
            .with_rotation(Quat::from_rotation_y(-FRAC_PI_2) * upright),
    ));

    // Baseboards
    let b = s.baseboard_size;
    let baseboard_mesh = meshes.add(Cuboid::new(b.x, b.y, b.z));
    commands.spawn((
        Name::new("Back Baseboard"),
        Mesh3d(baseboard_mesh.clone()),
        MeshMaterial3d(baseboard_material.clone()),
        Transform::from_xyz(0.0, s.baseboard_y, -s.baseboard_offset),
    ));
    commands.spawn((
        Name::new("Right Baseboard"),
        Mesh3d(baseboard_mesh),
        MeshMaterial3d(baseboard_material),
        Transform::from_xyz(s.baseboard_offset, s.baseboard_y, 0.0)
            .with_rotation(Quat::from_rotation_y(-FRAC_PI_2)),
    ));

    // Lighting
    let l = &cfg.lighting;
    commands.insert_resource(GlobalAmbientLight {
        brightness: l.ambient_brightness,
        ..default()
    });
    commands.spawn((
        Name::new("Key Light"),
        DirectionalLight {
            illuminance: l.key_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::default().looking_to(l.key_direction, Vec3::Y),
    ));
}

/// Spawns the five gltf props from the placement table.
pub fn spawn_props(
    mut commands: Commands,
    server: Res<AssetServer>,
    mut pending: ResMut<PendingAssets>,
) {
    for prop in PROPS {
        let scene: Handle<Scene> = server.load(GltfAssetLabel::Scene(0).from_asset(prop.path));
        pending
            .pending
            .push((format!("{} model", prop.name), scene.clone().untyped()));
        commands.spawn((
            Prop,
            Name::new(prop.name),
            SceneRoot(scene),
            Transform {
                translation: prop.translation,
                rotation: Quat::from_euler(
                    EulerRot::XYZ,
                    prop.rotation_xyz.x,
                    prop.rotation_xyz.y,
                    prop.rotation_xyz.z,
                ),
                scale: Vec3::splat(prop.scale),
            },
        ));
    }
}
