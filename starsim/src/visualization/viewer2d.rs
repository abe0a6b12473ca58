use std::path::PathBuf;

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::configuration::config::load_scenario;
use crate::simulation::scenario::Scene;
use crate::simulation::states::{BodyView, Tint, Viewport};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Where the scene came from, so a restart can pick up edited parameters.
#[derive(Resource)]
struct ScenarioSource(Option<PathBuf>);

/// Smallest on-screen radius so zero-radius bodies still show up.
const MIN_SCREEN_RADIUS: f32 = 1.0;

pub fn run_2d(scene: Scene, source: Option<PathBuf>) {
    let Viewport { width, height } = *scene.viewport();
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scene.store().len());

    App::new()
        .insert_resource(scene)
        .insert_resource(ScenarioSource(source))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity".into(),
                resolution: (width as f32, height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, (setup_camera_system, spawn_bodies_system))
        .add_systems(Update, (restart_system, physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn spawn_bodies_system(
    mut commands: Commands,
    scene: Res<Scene>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    spawn_bodies(&mut commands, &scene, &mut meshes, &mut materials);
}

fn spawn_bodies(
    commands: &mut Commands,
    scene: &Scene,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    let viewport = scene.viewport();
    let white = materials.add(ColorMaterial::from(Color::WHITE));
    let yellow = materials.add(ColorMaterial::from(Color::srgb(1.0, 1.0, 0.0)));

    for (i, body) in scene.bodies().iter().enumerate() {
        let radius_screen = (body.radius as f32).max(MIN_SCREEN_RADIUS);
        let material = match body.tint {
            Tint::White => white.clone(),
            Tint::Yellow => yellow.clone(),
        };

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material,
                transform: to_world(body, viewport),
                visibility: visibility_of(body),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// `R` reloads the scenario file (if any), repopulates the scene and
/// respawns the sprites. A bad file keeps the current parameters.
fn restart_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    source: Res<ScenarioSource>,
    mut scene: ResMut<Scene>,
    bodies: Query<Entity, With<BodyIndex>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    if let Some(path) = &source.0 {
        match load_scenario(path) {
            Ok(cfg) => {
                if let Err(e) = scene.reconfigure(&cfg.parameters) {
                    warn!("restart: keeping previous parameters: {e}");
                }
            }
            Err(e) => warn!("restart: could not reload {}: {e:#}", path.display()),
        }
    }

    let Viewport { width, height } = *scene.viewport();
    if let Err(e) = scene.reset(width, height) {
        error!("restart failed: {e}");
        return;
    }

    for entity in &bodies {
        commands.entity(entity).despawn();
    }
    spawn_bodies(&mut commands, &scene, &mut meshes, &mut materials);
}

fn physics_step_system(mut scene: ResMut<Scene>, time: Res<Time>) {
    // real elapsed time, so motion speed does not depend on frame rate
    if let Err(e) = scene.step(time.delta_seconds_f64()) {
        error!("step failed: {e}");
    }
}

fn sync_transforms_system(scene: Res<Scene>, mut query: Query<(&BodyIndex, &mut Transform, &mut Visibility)>) {
    let views = scene.bodies();
    let viewport = scene.viewport();
    for (BodyIndex(i), mut transform, mut visibility) in &mut query {
        if let Some(b) = views.get(*i) {
            *transform = to_world(b, viewport);
            *visibility = visibility_of(b);
        }
    }
}

// screen coordinates (origin top-left, y down) to Bevy world (origin centre, y up)
fn to_world(body: &BodyView, viewport: &Viewport) -> Transform {
    let x = body.x.x - viewport.width / 2.0;
    let y = viewport.height / 2.0 - body.x.y;
    Transform::from_xyz(x as f32, y as f32, 0.0)
}

fn visibility_of(body: &BodyView) -> Visibility {
    if body.visible { Visibility::Visible } else { Visibility::Hidden }
}
