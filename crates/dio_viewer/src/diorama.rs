//! The procedural island: a dirt plot around a round lake, a small house
//! with a stepped roof, a couple of acacia trees and a golden sun.

use dio_core::{rgb8, Environment, Light, Material};
use dio_math::Vec3;
use dio_renderer::{Cube, SceneContext, Sphere};

/// Edge length of a terrain/wall block.
const BLOCK: i32 = 2;

/// Half extent of the square plot.
const PLOT_EXTENT: i32 = 15;

/// Radius of the lake, centred on the origin.
const LAKE_RADIUS: f32 = 10.0;

const HOUSE_BASE_X: i32 = 6;
const HOUSE_BASE_Z: i32 = 6;
const HOUSE_WIDTH: i32 = 6;
const WALL_HEIGHT: i32 = 4;
const ROOF_LEVELS: i32 = 4;

/// Candidate tree spots in block units. Spots that land outside the plot
/// are skipped.
const TREE_SPOTS: [(i32, i32); 10] = [
    (4, -6),
    (8, 12),
    (-10, -8),
    (-12, 6),
    (6, -10),
    (-6, 10),
    (12, -12),
    (-4, 4),
    (10, 8),
    (-8, -4),
];

pub fn dirt() -> Material {
    Material::new(rgb8(150, 75, 0), 1.0, 0.3, 10.0).with_reflectivity(0.1)
}

/// Reflectivity and transparency sum past one; the pond is meant to glow.
pub fn water() -> Material {
    Material::new(rgb8(28, 107, 160), 0.5, 0.8, 50.0)
        .with_reflectivity(0.5)
        .with_transparency(0.8, 1.33)
}

pub fn sun() -> Material {
    Material::new(rgb8(255, 215, 0), 1.0, 0.0, 0.0)
}

pub fn walls() -> Material {
    Material::new(rgb8(210, 180, 140), 0.6, 0.3, 10.0).with_reflectivity(0.1)
}

pub fn roof() -> Material {
    Material::new(rgb8(180, 90, 20), 0.5, 0.2, 5.0).with_reflectivity(0.1)
}

pub fn trunk() -> Material {
    Material::new(rgb8(160, 82, 45), 0.6, 0.3, 10.0).with_reflectivity(0.1)
}

pub fn leaves() -> Material {
    Material::new(rgb8(107, 142, 35), 0.8, 0.2, 10.0)
}

/// Build the whole diorama lit by `light`.
///
/// Insertion order is stable (dirt, roof, lake, walls, sun, trees) since
/// the shadow test stops at the first occluder it finds.
pub fn build(light: Light, environment: Box<dyn Environment>) -> SceneContext {
    let mut scene = SceneContext::new(light, environment);

    add_dirt(&mut scene);
    add_roof(&mut scene);
    add_lake(&mut scene);
    add_walls(&mut scene);
    scene.push(Sphere::new(Vec3::new(0.0, 15.0, 0.0), 2.0, sun()));
    for &(x, z) in TREE_SPOTS.iter() {
        let (x, z) = (x * BLOCK, z * BLOCK);
        if x.abs() <= PLOT_EXTENT && z.abs() <= PLOT_EXTENT {
            add_tree(&mut scene, x, z);
        }
    }

    log::debug!("Built diorama with {} primitives", scene.len());
    scene
}

fn block(x: i32, y: i32, z: i32, size: i32, height: i32, material: Material) -> Cube {
    let min = Vec3::new(x as f32, y as f32, z as f32);
    let max = min + Vec3::new(size as f32, height as f32, size as f32);
    Cube::new(min, max, material)
}

fn distance_from_center(x: i32, z: i32) -> f32 {
    (x as f32).hypot(z as f32)
}

fn add_dirt(scene: &mut SceneContext) {
    for x in (-PLOT_EXTENT..=PLOT_EXTENT).step_by(BLOCK as usize) {
        for z in (-PLOT_EXTENT..=PLOT_EXTENT).step_by(BLOCK as usize) {
            if distance_from_center(x, z) > LAKE_RADIUS {
                scene.push(block(x, -BLOCK, z, BLOCK, BLOCK, dirt()));
            }
        }
    }
}

fn add_roof(scene: &mut SceneContext) {
    for level in 0..ROOF_LEVELS {
        let y = WALL_HEIGHT + level;
        for x in (HOUSE_BASE_X + level)..=(HOUSE_BASE_X + HOUSE_WIDTH - level) {
            for z in (HOUSE_BASE_Z + level)..=(HOUSE_BASE_Z + HOUSE_WIDTH - level) {
                scene.push(block(x, y, z, 1, 1, roof()));
            }
        }
    }
}

fn add_lake(scene: &mut SceneContext) {
    let radius = LAKE_RADIUS as i32;
    for x in (-radius..=radius).step_by(BLOCK as usize) {
        for z in (-radius..=radius).step_by(BLOCK as usize) {
            if distance_from_center(x, z) <= LAKE_RADIUS {
                scene.push(block(x, -BLOCK, z, BLOCK, BLOCK, water()));
            }
        }
    }
}

fn add_walls(scene: &mut SceneContext) {
    let center = (HOUSE_BASE_X + BLOCK, HOUSE_BASE_Z + BLOCK);
    for x in (HOUSE_BASE_X..HOUSE_BASE_X + HOUSE_WIDTH).step_by(BLOCK as usize) {
        for z in (HOUSE_BASE_Z..HOUSE_BASE_Z + HOUSE_WIDTH).step_by(BLOCK as usize) {
            if (x, z) != center {
                scene.push(block(x, 0, z, BLOCK, WALL_HEIGHT, walls()));
            }
        }
    }
}

fn add_tree(scene: &mut SceneContext, x: i32, z: i32) {
    for y in (0..3).map(|i| i * BLOCK) {
        scene.push(block(x, y, z, BLOCK, BLOCK, trunk()));
    }

    let canopy = 3 * BLOCK;
    for dx in [-BLOCK, 0, BLOCK] {
        for dz in [-BLOCK, 0, BLOCK] {
            if dx == 0 && dz == 0 {
                continue;
            }
            scene.push(block(x + dx, canopy, z + dz, BLOCK, BLOCK, leaves()));
        }
    }
}
