//! Guard FSM systems (perception + execute для каждого охранника).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::journal::{TransitionLog, TransitionRecord};
use crate::ai::controller::{GuardController, WorldView};
use crate::ai::events::GuardStateChanged;
use crate::ai::perception::TargetSnapshot;
use crate::components::{BodyVolume, Intruder, Occluder};
use crate::navigation::{NavAgent, NavHandle};
use crate::physics::{ObstacleField, RapierSight};
use crate::SimulationTick;

type GuardQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut GuardController,
        &'static mut Transform,
        &'static mut NavAgent,
        &'static BodyVolume,
    ),
    Without<Intruder>,
>;

type IntruderQuery<'w, 's> =
    Query<'w, 's, (Entity, &'static Transform, &'static Intruder, &'static BodyVolume), Without<GuardController>>;

/// Куда писать последствия swap'ов в этом запуске системы
struct TickOutput<'a, 'w> {
    tick: u64,
    changed: &'a mut EventWriter<'w, GuardStateChanged>,
    journal: &'a mut TransitionLog,
}

/// Отслеживаемая цель: intruder с наименьшим Entity (стабильно между прогонами)
fn tracked_target(intruders: &IntruderQuery) -> Option<TargetSnapshot> {
    intruders
        .iter()
        .min_by_key(|(entity, ..)| *entity)
        .map(|(entity, transform, intruder, _)| TargetSnapshot {
            entity,
            position: transform.translation,
            moving: intruder.moving,
        })
}

fn tick_guard(
    guard: Entity,
    controller: &mut GuardController,
    transform: &mut Transform,
    agent: &mut NavAgent,
    dt: f32,
    world: &WorldView,
    output: &mut TickOutput,
) {
    let mut mover = NavHandle {
        agent,
        position: transform.translation,
    };

    let Some(transition) = controller.tick(dt, transform, &mut mover, world) else {
        return;
    };

    crate::log(&format!(
        "AI: {:?} {} → {} (tick {})",
        guard, transition.from, transition.to, output.tick
    ));
    output.changed.write(GuardStateChanged {
        guard,
        from: transition.from,
        to: transition.to,
    });
    output.journal.push(TransitionRecord {
        tick: output.tick,
        guard,
        from: transition.from,
        to: transition.to,
    });
}

/// Система: FSM тик охранников, LOS через ObstacleField (headless)
///
/// Препятствия: Occluder + тела intruder'ов. Охранники взгляд не перекрывают.
pub fn tick_guards_headless(
    mut guards: GuardQuery,
    intruders: IntruderQuery,
    occluders: Query<(Entity, &Transform, &Occluder), (Without<GuardController>, Without<Intruder>)>,
    time: Res<Time<Fixed>>,
    tick: Res<SimulationTick>,
    mut changed: EventWriter<GuardStateChanged>,
    mut journal: ResMut<TransitionLog>,
) {
    let delta = time.delta_secs();
    let target = tracked_target(&intruders);

    let mut field = ObstacleField::new();
    for (entity, transform, occluder) in occluders.iter() {
        field.push(entity, transform.translation, occluder.half_extents);
    }
    for (entity, transform, _, body) in intruders.iter() {
        field.push(entity, body.center(transform.translation), body.half_extents);
    }

    let mut output = TickOutput {
        tick: tick.0,
        changed: &mut changed,
        journal: &mut journal,
    };
    for (entity, mut controller, mut transform, mut agent, body) in guards.iter_mut() {
        let world = WorldView {
            target,
            sight: &field,
            body_half_height: body.half_extents.y,
        };
        tick_guard(entity, &mut controller, &mut transform, &mut agent, delta, &world, &mut output);
    }
}

/// Система: FSM тик охранников, LOS через Rapier query pipeline
pub fn tick_guards_rapier(
    mut guards: GuardQuery,
    intruders: IntruderQuery,
    rapier: ReadRapierContext,
    time: Res<Time<Fixed>>,
    tick: Res<SimulationTick>,
    mut changed: EventWriter<GuardStateChanged>,
    mut journal: ResMut<TransitionLog>,
) {
    let Ok(context) = rapier.single() else {
        crate::log_error("tick_guards_rapier: no RapierContext, guards skipped this tick");
        return;
    };

    let delta = time.delta_secs();
    let target = tracked_target(&intruders);

    let mut output = TickOutput {
        tick: tick.0,
        changed: &mut changed,
        journal: &mut journal,
    };
    for (entity, mut controller, mut transform, mut agent, body) in guards.iter_mut() {
        let sight = RapierSight {
            context: &context,
            exclude: entity,
        };
        let world = WorldView {
            target,
            sight: &sight,
            body_half_height: body.half_extents.y,
        };
        tick_guard(entity, &mut controller, &mut transform, &mut agent, delta, &world, &mut output);
    }
}
