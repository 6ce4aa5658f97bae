//! Per-frame update phases for the lattice point simulation.
//!
//! The per-frame update is:
//! 1. [`pointer_phase`] — apply the radius-bounded pointer force to each
//!    point's velocity (attraction, or motion-gated repulsion).
//! 2. [`spring_phase`] — accelerate every point back toward its rest
//!    position.
//! 3. [`integrate_phase`] — integrate velocity into position, then damp.
//!
//! [`step`] composes the three in that order; one call advances the whole
//! lattice by exactly one frame. The phases never consult a clock of their
//! own — `now` is whatever timestamp the caller's frame scheduler reports,
//! on the same clock the pointer events were stamped with.

use crate::{
    config::{PointerPolicy, SimConfig},
    lattice::Lattice,
    pointer::PointerState,
};

/// Applies the pointer force to every point's velocity.
///
/// The force decays linearly from its maximum under the pointer to nothing
/// at the policy radius; points outside the radius are untouched. A point
/// exactly under the pointer gets no force at all — the direction is
/// undefined at zero distance, and skipping the term is what keeps the
/// state finite.
///
/// The attract policy runs whenever the pointer is over the surface. The
/// repel policy additionally requires a movement event within the policy's
/// motion window before `now`; a present-but-idle pointer leaves the
/// lattice to settle.
pub fn pointer_phase(lattice: &mut Lattice, pointer: &PointerState, cfg: &SimConfig, now: f64) {
    if !pointer.over {
        return;
    }
    match cfg.policy {
        PointerPolicy::Attract { radius, gain } => {
            for p in &mut lattice.points {
                let delta = pointer.pos - p.pos;
                let dist = delta.length();
                if dist > 0.0 {
                    let force = (radius - dist).max(0.0) * gain;
                    p.vel += delta / dist * force;
                }
            }
        }
        PointerPolicy::Repel {
            radius,
            max_force,
            motion_window,
        } => {
            if !pointer.is_moving(now, motion_window) {
                return;
            }
            for p in &mut lattice.points {
                let delta = pointer.pos - p.pos;
                let dist = delta.length();
                if dist > 0.0 && dist < radius {
                    let force = (1.0 - dist / radius) * max_force;
                    p.vel -= delta / dist * force;
                }
            }
        }
    }
}

/// Accelerates every point toward its rest position.
pub fn spring_phase(lattice: &mut Lattice, cfg: &SimConfig) {
    for p in &mut lattice.points {
        p.vel += (p.base - p.pos) * cfg.spring_k;
    }
}

/// Integrates velocity into position, then applies damping exactly once.
///
/// Damping is what bounds the system: the spring alone is lossless, and an
/// undamped lattice would ring forever instead of settling when the pointer
/// leaves.
pub fn integrate_phase(lattice: &mut Lattice, cfg: &SimConfig) {
    for p in &mut lattice.points {
        p.pos += p.vel;
        p.vel *= cfg.damping;
    }
}

/// Advances the whole lattice by one frame.
pub fn step(lattice: &mut Lattice, pointer: &PointerState, cfg: &SimConfig, now: f64) {
    pointer_phase(lattice, pointer, cfg, now);
    spring_phase(lattice, cfg);
    integrate_phase(lattice, cfg);
}
