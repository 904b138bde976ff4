use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;
use log::info;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::palette::charge_color;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Which field view is drawn; flipped with Space
#[derive(Resource)]
struct ViewMode {
    show_vectors: bool,
}

const TICK_HZ: f64 = 60.0;
const HELP_TEXT: &str = "Space: switch view   R: reset";
const ARROW_TIP_RADIUS: f32 = 2.0;

pub fn run_2d(scenario: Scenario) {
    let bounds = scenario.system.bounds;
    info!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.system.len()
    );

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(ViewMode {
            show_vectors: scenario.view.show_vectors,
        })
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Electric Interaction Sim".into(),
                        resolution: WindowResolution::new(bounds.width as f32, bounds.height as f32),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // logging goes through env_logger, set up in main
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_particles_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (keyboard_system, sync_transforms_system, draw_field_system).chain(),
        )
        .run();
}

/// Simulation coordinates have the origin in the bottom-left corner,
/// the Bevy 2D camera is centred on the window
fn to_screen(p: NVec2, scenario: &Scenario) -> Vec2 {
    let c = scenario.system.bounds.center();
    Vec2::new((p.x - c.x) as f32, (p.y - c.y) as f32)
}

fn setup_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn(
        TextBundle::from_section(
            HELP_TEXT,
            TextStyle {
                font_size: 18.0,
                color: Color::BLACK,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
    );

    for (i, p) in scenario.system.particles().iter().enumerate() {
        let [r, g, b] = charge_color(p.charge());
        let pos = to_screen(p.position, &scenario);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(p.radius() as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut view: ResMut<ViewMode>,
    mut scenario: ResMut<Scenario>,
) {
    if keys.just_pressed(KeyCode::Space) {
        view.show_vectors = !view.show_vectors;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.system.particles().get(*i) {
            let pos = to_screen(p.position, &scenario);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_field_system(scenario: Res<Scenario>, view: Res<ViewMode>, mut gizmos: Gizmos) {
    if view.show_vectors {
        for (start, end) in scenario.field_arrows() {
            let end = to_screen(end, &scenario);
            gizmos.line_2d(to_screen(start, &scenario), end, Color::BLACK);
            gizmos.circle_2d(end, ARROW_TIP_RADIUS, Color::BLACK);
        }
    } else {
        for line in scenario.field_lines() {
            let points = line.iter().map(|p| to_screen(*p, &scenario));
            gizmos.linestrip_2d(points, Color::BLACK);
        }
    }
}
