/// How the pointer acts on nearby points.
///
/// Both policies bound the force to a radius around the pointer and decay it
/// linearly with distance; they differ in direction and in when they apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerPolicy {
    /// Points are pulled toward the pointer whenever it is over the surface.
    /// The force magnitude is `max(0, radius - dist) * gain`.
    Attract { radius: f32, gain: f32 },
    /// Points are pushed away from the pointer, but only while the pointer
    /// has produced a movement event within the last `motion_window`
    /// seconds. The force magnitude is `(1 - dist / radius) * max_force`
    /// inside the radius.
    Repel {
        radius: f32,
        max_force: f32,
        motion_window: f64,
    },
}

/// Force-law parameters shared by every point, consumed read-only by the
/// phase functions in [`crate::phases`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub policy: PointerPolicy,
    /// Restoring acceleration per pixel of displacement from rest.
    pub spring_k: f32,
    /// Multiplicative per-frame velocity decay, in (0, 1).
    pub damping: f32,
}

impl SimConfig {
    /// The dense square-grid variant: stiff spring, attraction toward the
    /// pointer.
    pub fn attract_grid() -> Self {
        Self {
            policy: PointerPolicy::Attract {
                radius: 100.0,
                gain: 0.1,
            },
            spring_k: 0.3,
            damping: 0.9,
        }
    }

    /// The sparse hexagon variant: loose spring, motion-gated repulsion.
    pub fn repel_hex() -> Self {
        Self {
            policy: PointerPolicy::Repel {
                radius: 120.0,
                max_force: 5.0,
                motion_window: 0.1,
            },
            spring_k: 0.1,
            damping: 0.9,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::repel_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_configs_use_their_observed_spring_constants() {
        assert_eq!(SimConfig::attract_grid().spring_k, 0.3);
        assert_eq!(SimConfig::repel_hex().spring_k, 0.1);
    }

    #[test]
    fn default_is_the_repel_variant() {
        assert!(matches!(
            SimConfig::default().policy,
            PointerPolicy::Repel { .. }
        ));
    }
}
