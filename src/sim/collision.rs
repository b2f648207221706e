//! Per-tick collision and damage resolution
//!
//! The pairwise scan only marks entities; removals are applied once the scan
//! is complete so nothing is judged against a half-updated collection.

use super::entity::Body;
use super::geometry::circles_overlap;
use super::hostile::Hostile;
use super::player::Player;
use super::projectile::Projectile;

/// Footprint scale per collision kind
#[derive(Debug, Clone, Copy)]
pub struct CollisionScales {
    pub projectile_hit: f32,
    pub contact: f32,
}

/// What happened during one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Hostiles destroyed by projectiles
    pub kills: u32,
    /// Projectiles consumed by hits
    pub hits: u32,
    /// Contact damage dealt to the player
    pub player_damage: f32,
}

/// Resolve projectile hits and hostile contact for one tick
pub fn resolve(
    projectiles: &mut Vec<Projectile>,
    hostiles: &mut Vec<Hostile>,
    player: &mut Player,
    scales: CollisionScales,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut dead_hostiles = vec![false; hostiles.len()];

    for projectile in projectiles.iter_mut() {
        if projectile.spent {
            continue;
        }
        for (i, hostile) in hostiles.iter_mut().enumerate() {
            if dead_hostiles[i] {
                continue;
            }
            if !circles_overlap(
                projectile.pos,
                projectile.footprint(),
                hostile.pos,
                hostile.footprint(),
                scales.projectile_hit,
            ) {
                continue;
            }
            hostile.take_damage(projectile.damage);
            projectile.spent = true;
            report.hits += 1;
            if !hostile.is_alive() {
                dead_hostiles[i] = true;
                report.kills += 1;
            }
            // One hostile per projectile
            break;
        }
    }

    for (i, hostile) in hostiles.iter().enumerate() {
        if dead_hostiles[i] {
            continue;
        }
        if circles_overlap(
            hostile.pos,
            hostile.footprint(),
            player.pos,
            player.footprint(),
            scales.contact,
        ) {
            player.take_damage(hostile.contact_damage);
            report.player_damage += hostile.contact_damage;
        }
    }

    projectiles.retain(|p| !p.spent);
    let mut marks = dead_hostiles.into_iter();
    hostiles.retain(|_| !marks.next().unwrap_or(false));

    report
}
