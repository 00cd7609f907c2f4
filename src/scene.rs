use glam::{Mat4, Vec3};

// Instance transform layouts. Every builder is deterministic so a given
// scene always uploads the same instance buffer.

pub fn single(scale: f32) -> Vec<Mat4> {
    vec![Mat4::from_scale(Vec3::splat(scale))]
}

/// `count` instances evenly spaced on a circle of `radius` in the Y = 0
/// plane.
pub fn ring(count: u32, radius: f32, scale: f32) -> Vec<Mat4> {
    let segment_angle = std::f32::consts::TAU / count as f32;
    (0..count)
        .map(|i| {
            let angle = segment_angle * i as f32;
            let translation = Vec3::new(angle.cos(), 0.0, angle.sin()) * radius;
            place(translation, scale)
        })
        .collect()
}

/// `side`³ instances on a cubic grid centered on the origin, `spacing`
/// apart along each axis.
pub fn lattice(side: u32, spacing: f32, scale: f32) -> Vec<Mat4> {
    let center = (side as f32 - 1.0) * 0.5;
    let mut instances = Vec::with_capacity((side * side * side) as usize);
    for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                let translation =
                    (Vec3::new(x as f32, y as f32, z as f32) - Vec3::splat(center)) * spacing;
                instances.push(place(translation, scale));
            }
        }
    }
    instances
}

/// `count` instances on a golden-angle spiral disc of `radius` in the
/// Y = 0 plane, area-uniform from the center outward.
pub fn spiral(count: u32, radius: f32, scale: f32) -> Vec<Mat4> {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    (0..count)
        .map(|i| {
            let r = radius * ((i as f32 + 0.5) / count as f32).sqrt();
            let angle = golden_angle * i as f32;
            let translation = Vec3::new(angle.cos(), 0.0, angle.sin()) * r;
            place(translation, scale)
        })
        .collect()
}

fn place(translation: Vec3, scale: f32) -> Mat4 {
    Mat4::from_translation(translation) * Mat4::from_scale(Vec3::splat(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation_of(instance: &Mat4) -> Vec3 {
        instance.col(3).truncate()
    }

    #[test]
    fn builders_return_the_requested_instance_counts() {
        assert_eq!(single(2.0).len(), 1);
        assert_eq!(ring(12, 4.0, 1.0).len(), 12);
        assert_eq!(lattice(3, 2.0, 1.0).len(), 27);
        assert_eq!(spiral(100, 8.0, 1.0).len(), 100);
    }

    #[test]
    fn ring_instances_sit_on_the_circle() {
        for instance in ring(16, 4.0, 1.0).iter() {
            let translation = translation_of(instance);
            assert!((translation.length() - 4.0).abs() < 1e-5);
            assert_eq!(translation.y, 0.0);
        }
    }

    #[test]
    fn lattice_is_centered_on_the_origin() {
        let instances = lattice(4, 1.5, 1.0);
        let sum: Vec3 = instances.iter().map(translation_of).sum();
        assert!(sum.length() < 1e-4);
    }

    #[test]
    fn spiral_stays_inside_its_radius() {
        for instance in spiral(64, 8.0, 1.0).iter() {
            let translation = translation_of(instance);
            assert!(translation.length() <= 8.0 + 1e-5);
            assert_eq!(translation.y, 0.0);
        }
    }

    #[test]
    fn place_applies_scale_before_translation() {
        let instance = place(Vec3::new(3.0, 0.0, 0.0), 2.0);
        let transformed = instance * glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(transformed.truncate(), Vec3::new(5.0, 0.0, 0.0));
    }
}
