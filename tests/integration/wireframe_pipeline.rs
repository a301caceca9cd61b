// tests/integration/wireframe_pipeline.rs
//! Cuboid -> transform -> projection -> canvas, end to end

use tabula::config::RenderConfig;
use tabula::numerics::types::point::{coordinates, point3};
use tabula::renderer_cpu_ref::canvas::{Canvas, Color};
use tabula::renderer_cpu_ref::projection::{Camera, ProjectionMode};
use tabula::renderer_cpu_ref::reference::{draw_mesh, render_frame, render_frame_to_png, Viewport};
use tabula::scene::transform::rotation_z;
use tabula::scene::{Cuboid, Mesh, Scene};

fn spinning_box_scene(degrees: f32) -> Scene {
    let mut cuboid = Cuboid::new(100.0, 50.0, 25.0).unwrap();
    cuboid
        .part_mut()
        .set_rotation(rotation_z(degrees.to_radians()).unwrap())
        .unwrap()
        .set_position(point3(400.0, 0.0, 300.0))
        .unwrap();

    let mut scene = Scene::new("spinning box");
    scene.add_part(cuboid.into_part());
    scene
}

#[test]
fn test_rotation_keeps_box_around_its_axis() {
    println!("=== Box Placement Test ===");

    for degrees in [0.0, 30.0, 90.0, 200.0] {
        let scene = spinning_box_scene(degrees);
        let meshes = scene.world_meshes().unwrap();
        assert_eq!(meshes.len(), 12);

        for mesh in &meshes {
            for vertex in mesh.vertices() {
                let [x, y, z] = coordinates(vertex).unwrap();
                // corners sit 50 or sqrt(50² + 25²) away from the z axis through the position
                let r2 = (x - 400.0).powi(2) + y.powi(2);
                assert!(
                    (r2 - 2500.0).abs() < 0.1 || (r2 - 3125.0).abs() < 0.1,
                    "{degrees} degrees: r² = {r2}"
                );
                // rotating about z never moves z
                assert!((z - 275.0).abs() < 1e-3 || (z - 325.0).abs() < 1e-3, "z = {z}");
            }
        }
    }
}

#[test]
fn test_frames_differ_as_the_box_turns() {
    println!("=== Animation Frames Test ===");
    crate::init_tracing();

    let config = RenderConfig::default();
    let first = render_frame(&spinning_box_scene(0.0), &config).unwrap();
    let later = render_frame(&spinning_box_scene(2.0 * 15.0), &config).unwrap();

    assert!(first.count_not(config.background) > 0);
    assert!(later.count_not(config.background) > 0);
    assert_ne!(first.pixels(), later.pixels());
}

#[test]
fn test_projection_modes_render_different_outlines() {
    let scene = spinning_box_scene(20.0);
    let oblique = render_frame(&scene, &RenderConfig::default()).unwrap();
    let front = render_frame(
        &scene,
        &RenderConfig {
            projection: ProjectionMode::Orthographic,
            ..RenderConfig::default()
        },
    )
    .unwrap();
    assert_ne!(oblique.pixels(), front.pixels());
}

#[test]
fn test_perspective_camera_follows_config() {
    let scene = spinning_box_scene(20.0);
    let perspective = RenderConfig {
        projection: ProjectionMode::Perspective,
        camera: Camera::new(point3(400.0, -600.0, 300.0), point3(400.0, 0.0, 300.0), 600.0).unwrap(),
        center_origin: true,
        ..RenderConfig::default()
    };
    let head_on = render_frame(&scene, &perspective).unwrap();
    assert!(head_on.count_not(perspective.background) > 100);

    let aside = RenderConfig {
        camera: Camera::new(point3(0.0, -600.0, 300.0), point3(400.0, 0.0, 300.0), 600.0).unwrap(),
        ..perspective.clone()
    };
    let turned = render_frame(&scene, &aside).unwrap();
    assert_ne!(head_on.pixels(), turned.pixels());

    let orthographic = RenderConfig {
        projection: ProjectionMode::Orthographic,
        ..perspective
    };
    assert_ne!(head_on.pixels(), render_frame(&scene, &orthographic).unwrap().pixels());
}

#[test]
fn test_single_mesh_outline_touches_its_corners() {
    let mesh = Mesh::new(
        point3(10.0, 0.0, 10.0),
        point3(50.0, 0.0, 10.0),
        point3(10.0, 0.0, 40.0),
    )
    .unwrap();
    let mut canvas = Canvas::new(64, 64);
    let viewport = Viewport::of(&canvas, false);
    let projector = ProjectionMode::Orthographic.projector(&Camera::default()).unwrap();

    let painted = draw_mesh(&mut canvas, viewport, &projector, &mesh, Color::WHITE).unwrap();
    assert!(painted >= 40 + 30 + 50);
    for (x, y) in [(10, 10), (50, 10), (10, 40)] {
        assert_eq!(canvas.get(x, y), Some(Color::WHITE), "corner ({x}, {y})");
    }
}

#[test]
fn test_render_to_png_file() {
    println!("=== PNG Output Test ===");
    crate::init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    let config = RenderConfig::high_resolution();

    let mut scene = spinning_box_scene(45.0);
    scene
        .part_mut(0)
        .unwrap()
        .set_position(point3(0.0, 0.0, 0.0))
        .unwrap();
    render_frame_to_png(&scene, &config, &path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (1920, 1080));
    let white = image.pixels().filter(|p| p.0 == [0xff, 0xff, 0xff, 0xff]).count();
    assert!(white > 100, "only {white} edge pixels");
    println!("Rendered {white} edge pixels into {:?}", path);
}
