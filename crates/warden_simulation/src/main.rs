//! Headless demo WARDEN
//!
//! Два охранника (патруль + watcher), стена и intruder, который бродит
//! по случайным точкам (DeterministicRng). В конце печатает TransitionLog.
//!
//! Аргументы: `--physics` (rapier LOS), `--seed N`, `--ticks N`, `--config guard.json`

use bevy::prelude::*;
use rand::Rng;
use warden_simulation::*;

const ARENA_HALF_SIZE: f32 = 12.0;
const INTRUDER_SPEED: f32 = 2.0;
const TRANSITION_LOG_LIMIT: usize = 4096;

struct DemoArgs {
    backend: SightBackend,
    seed: u64,
    ticks: u64,
    config_path: Option<String>,
}

fn parse_args() -> DemoArgs {
    let mut args = DemoArgs {
        backend: SightBackend::Headless,
        seed: 42,
        ticks: 3600,
        config_path: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--physics" => args.backend = SightBackend::Rapier,
            "--seed" => args.seed = iter.next().and_then(|v| v.parse().ok()).unwrap_or(args.seed),
            "--ticks" => args.ticks = iter.next().and_then(|v| v.parse().ok()).unwrap_or(args.ticks),
            "--config" => args.config_path = iter.next(),
            other => log_warning(&format!("Unknown argument: {}", other)),
        }
    }

    args
}

fn load_config(path: Option<&str>) -> Result<GuardConfig, String> {
    let Some(path) = path else {
        return Ok(GuardConfig::default());
    };

    let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    GuardConfig::from_json(&json).map_err(|e| format!("{}: {}", path, e))
}

/// Точка, к которой идёт intruder (None — стоит и ждёт)
#[derive(Component, Default)]
struct Wander {
    goal: Option<Vec3>,
    idle: f32,
}

/// Demo-система: intruder бродит между случайными точками с паузами
fn wander_intruder(
    mut intruders: Query<(&mut Transform, &mut Intruder, &mut Wander)>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut intruder, mut wander) in intruders.iter_mut() {
        let Some(goal) = wander.goal else {
            wander.idle -= delta;
            intruder.moving = false;
            if wander.idle <= 0.0 {
                let x = rng.rng.gen_range(-ARENA_HALF_SIZE..ARENA_HALF_SIZE);
                let z = rng.rng.gen_range(-ARENA_HALF_SIZE..ARENA_HALF_SIZE);
                wander.goal = Some(Vec3::new(x, 0.0, z));
            }
            continue;
        };

        let to_goal = goal - transform.translation;
        let step = INTRUDER_SPEED * delta;
        if to_goal.length() <= step {
            transform.translation = goal;
            wander.goal = None;
            wander.idle = rng.rng.gen_range(0.5..3.0);
            intruder.moving = false;
        } else {
            transform.translation += to_goal.normalize() * step;
            intruder.moving = true;
        }
    }
}

fn main() {
    let args = parse_args();
    init_logger();

    let config = match load_config(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            log_error(&format!("Invalid guard config: {}", message));
            std::process::exit(1);
        }
    };

    log_info(&format!(
        "Starting WARDEN headless demo (seed: {}, backend: {:?}, ticks: {})",
        args.seed, args.backend, args.ticks
    ));

    let mut app = create_headless_app(args.seed);
    app.add_plugins(SimulationPlugin { sight: args.backend })
        .insert_resource(TransitionLog::bounded(TRANSITION_LOG_LIMIT))
        .add_systems(FixedUpdate, wander_intruder.before(SimulationSet::Decide).after(SimulationSet::Tick));

    let backend = args.backend;
    {
        let world = app.world_mut();
        let mut commands = world.commands();

        let patrol = config.clone().with_waypoints([
            Vec3::new(-8.0, 0.0, -8.0),
            Vec3::new(8.0, 0.0, -8.0),
            Vec3::new(8.0, 0.0, 8.0),
            Vec3::new(-8.0, 0.0, 8.0),
        ]);
        spawn_guard(&mut commands, patrol, Transform::from_xyz(-8.0, 0.0, -8.0), backend);

        let watcher = config.clone().with_waypoints([]);
        let post = Transform::from_xyz(0.0, 0.0, 10.0).looking_to(Vec3::NEG_Z, Vec3::Y);
        spawn_guard(&mut commands, watcher, post, backend);

        spawn_occluder(&mut commands, Vec3::new(0.0, 1.5, 0.0), Vec3::new(4.0, 1.5, 0.3), backend);

        let intruder = spawn_intruder(&mut commands, Vec3::new(0.0, 0.0, -3.0), backend);
        commands.entity(intruder).insert(Wander::default());
    }
    app.world_mut().flush();

    let mut caught_total = 0usize;
    for tick in 1..=args.ticks {
        run_until_tick(&mut app, tick);

        let caught = app.world().resource::<Events<TargetCaught>>();
        caught_total += caught.iter_current_update_events().count();

        if tick % 600 == 0 {
            let transitions = app.world().resource::<TransitionLog>().entries.len();
            log_info(&format!("Tick {}: {} transitions, {} catches", tick, transitions, caught_total));
        }
    }

    match app.world().resource::<TransitionLog>().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log_error(&format!("TransitionLog serialization failed: {}", e)),
    }
    log_info(&format!("Simulation complete! Catches: {}", caught_total));
}
