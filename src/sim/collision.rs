//! Pairwise blob collision and arena wall containment
//!
//! Every unordered pair is visited exactly once per step, in ascending index
//! order. Overlap is resolved with an equal-mass elastic response: centers are
//! pushed apart to exact contact and the velocity components along the contact
//! normal are exchanged, leaving tangential motion untouched. A dense cluster
//! may need several steps to fully separate; that relaxation is intentional.

use super::state::Blob;
use crate::config::Arena;

/// Below this center distance the contact normal is undefined and the pair is
/// skipped for the step
const MIN_SEPARATION: f32 = 1e-6;

/// Detect and resolve overlap for every pair, ascending index order
pub fn resolve_pairs(blobs: &mut [Blob]) {
    for i in 0..blobs.len() {
        for j in (i + 1)..blobs.len() {
            let (head, tail) = blobs.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0]);
        }
    }
}

/// Resolve a single pair: positional de-penetration plus equal-mass elastic
/// velocity exchange along the contact normal
pub fn resolve_pair(a: &mut Blob, b: &mut Blob) {
    let delta = b.center - a.center;
    let distance = delta.length();
    let min_distance = a.max_radius + b.max_radius;
    if distance >= min_distance {
        return;
    }
    if distance <= MIN_SEPARATION {
        // Coincident centers: no usable normal this step
        return;
    }

    let normal = delta / distance;
    let overlap = min_distance - distance;
    a.center -= normal * (overlap / 2.0);
    b.center += normal * (overlap / 2.0);

    // Exchange normal components, keep tangential components
    let a_normal = a.vel.dot(normal);
    let b_normal = b.vel.dot(normal);
    a.vel += (b_normal - a_normal) * normal;
    b.vel += (a_normal - b_normal) * normal;
}

/// Keep the blob's collision disk inside the arena, flipping the velocity
/// component on each crossed axis; corner contact flips both in one step
pub fn bounce_walls(blob: &mut Blob, arena: &Arena) {
    let r = blob.max_radius;
    if blob.center.x - r < 0.0 || blob.center.x + r > arena.width {
        blob.vel.x = -blob.vel.x;
        blob.center.x = blob.center.x.clamp(r, arena.width - r);
    }
    if blob.center.y - r < 0.0 || blob.center.y + r > arena.height {
        blob.vel.y = -blob.vel.y;
        blob.center.y = blob.center.y.clamp(r, arena.height - r);
    }
}
