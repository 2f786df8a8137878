use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use render_core::camera::CameraMovement;
use render_core::cli::Cli;
use render_core::{Camera, CameraConfig, Clock, Light, LightKind, Scene, Vec3};

// === Constants ===

const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const ASPECT_RATIO: f32 = 800.0 / 600.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)?,
        None => CameraConfig::default(),
    };

    let mut scene = Scene::new();

    let camera_id = scene.spawn();
    scene
        .entity_mut(camera_id)?
        .attach_camera(Camera::from_config(&config));

    let sun_id = scene.spawn();
    scene
        .entity_mut(sun_id)?
        .attach_light(Light::new(LightKind::Directional));

    let lamp_id = scene.spawn();
    {
        let lamp = scene.entity_mut(lamp_id)?;
        lamp.transform.set_position(Vec3::new(1.2, 1.0, 2.0));
        lamp.attach_light(Light::new(LightKind::Point));
    }

    info!(
        "simulating {} frames at fixed dt {:.4}s",
        cli.frames, FIXED_TIMESTEP
    );

    // Scripted input: push forward for the first half, sweep the view around
    // for the second, zoom in every second. Deterministic, so runs are
    // comparable; the wall clock only feeds the log.
    let mut wall_clock = Clock::new();
    for frame in 0..cli.frames {
        let camera = scene.entity_mut(camera_id)?.camera_mut()?;

        if frame < cli.frames / 2 {
            camera.process_keyboard(CameraMovement::Forward, FIXED_TIMESTEP);
        } else {
            camera.process_mouse_movement(4.0, 1.0, true);
        }
        if frame % 60 == 59 {
            camera.process_mouse_scroll(1.0);
        }

        debug!(
            "frame {frame}: wall {:.4}s position {} fov {:.1}",
            wall_clock.tick(),
            camera.position(),
            camera.field_of_view
        );
    }

    let camera = scene.entity(camera_id)?.camera()?;
    let view = camera.view_matrix();
    let projection = camera.projection_matrix(ASPECT_RATIO, NEAR_PLANE, FAR_PLANE);

    info!(
        "done in {:.3}s: position {} angles {}",
        wall_clock.elapsed(),
        camera.position(),
        camera.transform.euler_angles()
    );

    if cli.json {
        let lights: Vec<_> = scene
            .lights()
            .map(|(transform, light)| light.to_uniform(transform.position()))
            .collect();
        let out = serde_json::json!({
            "view": view.to_cols_array(),
            "projection": projection.to_cols_array(),
            "camera": {
                "position": camera.position().to_array(),
                "front": camera.front().to_array(),
                "fov": camera.field_of_view,
            },
            "lights": lights.iter().map(|l| l.position).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("view       {view}");
        println!("projection {projection}");
        println!("camera     {} fov {:.1}", camera.position(), camera.field_of_view);
    }

    Ok(())
}
