use crate::registry::ProjectileId;
use bevy_ecs::prelude::*;
use glam::Vec2;

/// Everything the host simulation needs to instantiate one live projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub template: ProjectileId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub ai0: f32,
    pub ai1: f32,
    pub damage: i32,
    pub knockback: f32,
    pub owner: u32,
}

/// The single call into the live world. Fire-and-forget: no result is
/// modeled, failures belong to the host simulation.
pub trait SpawnBridge {
    fn spawn_projectile(&mut self, request: &SpawnRequest);
}

// ---------- Components ----------
#[derive(Component, Clone, Copy)]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { translation: Vec2::ZERO, rotation: 0.0 }
    }
}

#[derive(Component, Clone, Copy)]
pub struct Velocity(pub Vec2);

#[derive(Component, Clone, Copy)]
pub struct ProjectileState {
    pub template: ProjectileId,
    pub ai: [f32; 2],
    pub damage: i32,
    pub knockback: f32,
    pub owner: u32,
}

#[derive(Resource)]
struct TimeDelta(f32);

// ---------- World container ----------
/// Minimal live world the browser spawns into. Hosts embedding the browser in
/// a full engine implement `SpawnBridge` on their own world instead.
pub struct EcsWorld {
    pub world: World,
    schedule: Schedule,
}

impl EcsWorld {
    pub fn new() -> Self {
        let mut world = World::new();
        world.insert_resource(TimeDelta(0.0));
        let mut schedule = Schedule::default();
        schedule.add_systems(sys_integrate_velocities);
        Self { world, schedule }
    }

    pub fn step(&mut self, dt: f32) {
        self.world.insert_resource(TimeDelta(dt));
        self.schedule.run(&mut self.world);
    }

    pub fn projectile_count(&mut self) -> usize {
        self.world.query::<&ProjectileState>().iter(&self.world).count()
    }

    pub fn projectiles(&mut self) -> Vec<(ProjectileId, Vec2)> {
        self.world
            .query::<(&ProjectileState, &Transform)>()
            .iter(&self.world)
            .map(|(state, transform)| (state.template, transform.translation))
            .collect()
    }
}

impl Default for EcsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnBridge for EcsWorld {
    fn spawn_projectile(&mut self, request: &SpawnRequest) {
        self.world.spawn((
            Transform { translation: request.position, rotation: 0.0 },
            Velocity(request.velocity),
            ProjectileState {
                template: request.template,
                ai: [request.ai0, request.ai1],
                damage: request.damage,
                knockback: request.knockback,
                owner: request.owner,
            },
        ));
    }
}

fn sys_integrate_velocities(time: Res<TimeDelta>, mut query: Query<(&Velocity, &mut Transform)>) {
    let dt = time.0;
    for (velocity, mut transform) in query.iter_mut() {
        transform.translation += velocity.0 * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(template: u32, position: Vec2, velocity: Vec2) -> SpawnRequest {
        SpawnRequest {
            template: ProjectileId(template),
            position,
            velocity,
            ai0: 0.0,
            ai1: 0.0,
            damage: 10,
            knockback: 1.5,
            owner: 0,
        }
    }

    #[test]
    fn spawned_projectiles_enter_the_world() {
        let mut world = EcsWorld::new();
        world.spawn_projectile(&request(3, Vec2::new(1.0, 2.0), Vec2::ZERO));
        world.spawn_projectile(&request(3, Vec2::new(4.0, 5.0), Vec2::ZERO));
        assert_eq!(world.projectile_count(), 2);
    }

    #[test]
    fn velocities_integrate_on_step() {
        let mut world = EcsWorld::new();
        world.spawn_projectile(&request(1, Vec2::ZERO, Vec2::new(10.0, -4.0)));
        world.step(0.5);
        let projectiles = world.projectiles();
        assert_eq!(projectiles.len(), 1);
        let (template, position) = projectiles[0];
        assert_eq!(template, ProjectileId(1));
        assert!((position - Vec2::new(5.0, -2.0)).length() < 1e-5);
    }
}
