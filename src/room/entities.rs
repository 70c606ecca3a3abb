use std::f32::consts::{FRAC_PI_2, PI};

use bevy::asset::UntypedHandle;
use bevy::prelude::*;

/// Marker component for gltf prop root entities.
#[derive(Component, Reflect)]
pub struct Prop;

/// Declarative placement for one gltf prop.
pub struct PropSpec {
    /// Entity name, also used in load-status logs.
    pub name: &'static str,
    /// Asset path of the gltf file.
    pub path: &'static str,
    /// World translation.
    pub translation: Vec3,
    /// Euler rotation, XYZ order, radians.
    pub rotation_xyz: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

/// The five props on and around the desk.
pub const PROPS: &[PropSpec] = &[
    PropSpec {
        name: "Computer",
        path: "models/macbook/model.gltf",
        translation: Vec3::ZERO,
        rotation_xyz: Vec3::ZERO,
        scale: 1.0,
    },
    PropSpec {
        name: "Desk",
        path: "models/desk/model.gltf",
        translation: Vec3::new(0.6, -127.24, -18.0),
        rotation_xyz: Vec3::new(0.0, FRAC_PI_2, 0.0),
        scale: 4.0,
    },
    PropSpec {
        name: "Headphones",
        path: "models/headphones/model.gltf",
        translation: Vec3::new(3.0, 1.34, 1.3),
        rotation_xyz: Vec3::new(FRAC_PI_2, 0.0, PI),
        scale: 0.8,
    },
    PropSpec {
        name: "Glass",
        path: "models/soda-glass/model.gltf",
        translation: Vec3::new(-2.5, 0.42, 0.0),
        rotation_xyz: Vec3::new(0.0, PI, 0.0),
        scale: 3.0,
    },
    PropSpec {
        name: "Plant",
        path: "models/plant/model.gltf",
        translation: Vec3::new(4.0, 0.7, -3.0),
        rotation_xyz: Vec3::new(0.0, PI, 0.0),
        scale: 1.0,
    },
];

/// Assets whose load completion has not been reported yet.
#[derive(Resource, Default)]
pub struct PendingAssets {
    /// `(label, handle)` pairs still loading.
    pub pending: Vec<(String, UntypedHandle)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prop_has_a_distinct_gltf_path() {
        let mut paths: Vec<_> = PROPS.iter().map(|p| p.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), PROPS.len());
    }

    #[test]
    fn prop_paths_point_at_gltf_files() {
        assert!(PROPS.iter().all(|p| p.path.ends_with("/model.gltf")));
    }

    #[test]
    fn prop_scales_are_positive() {
        assert!(PROPS.iter().all(|p| p.scale > 0.0));
    }
}
