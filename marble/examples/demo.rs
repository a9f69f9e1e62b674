//! Builds a tiny level (a floor with a few crates on it), shoots a couple of
//! picking rays and then rolls a ball across the floor until it bumps into a
//! crate.
//!
//! Run with `RUST_LOG=marble=trace` to see what the BVH is up to.

use glam::{vec3, Affine3A, Quat, Vec3};
use marble::{Bvh, Contact, Mesh, ObjectId};

const FLOOR: ObjectId = ObjectId::new(0);

fn main() {
    env_logger::init();

    let floor = Mesh::cuboid(vec3(10.0, 0.5, 10.0));
    let crate_ = Mesh::cuboid(Vec3::splat(1.0));

    let mut objects = vec![(
        FLOOR,
        &floor,
        Affine3A::from_translation(vec3(0.0, -0.5, 0.0)),
    )];

    for (id, x, z, angle) in [
        (1, 4.0, 0.0, 0.0),
        (2, -3.0, 2.5, 0.4),
        (3, 1.0, -5.0, 1.2),
    ] {
        let transform = Affine3A::from_rotation_translation(
            Quat::from_rotation_y(angle),
            vec3(x, 1.0, z),
        );

        objects.push((ObjectId::new(id), &crate_, transform));
    }

    let mut bvh = Bvh::new();

    bvh.rebuild(objects);

    println!("{bvh}");
    println!("{}", bvh.stats());
    println!();

    for (origin, direction) in [
        (vec3(4.0, 10.0, 0.0), -Vec3::Y),
        (vec3(-8.0, 1.0, 2.5), Vec3::X),
        (vec3(0.0, 10.0, 0.0), Vec3::Y),
    ] {
        match bvh.ray_test(origin, direction) {
            Some(hit) => {
                println!(
                    "ray {} -> {}: hit {} at {} (t = {})",
                    origin, direction, hit.object, hit.point, hit.distance
                );
            }

            None => {
                println!("ray {} -> {}: miss", origin, direction);
            }
        }
    }

    println!();

    let radius = 0.5;
    let velocity = vec3(1.0, 0.0, 0.0);
    let mut center = vec3(-1.0, radius - 0.01, 0.0);
    let mut contacts = Vec::new();

    for step in 0..40 {
        bvh.ball_test(center, radius, velocity, &mut contacts, 8);

        let bumped: Vec<&Contact> = contacts
            .iter()
            .filter(|contact| contact.object != FLOOR)
            .collect();

        if let Some(contact) = bumped.first() {
            println!(
                "step {}: ball at {} bumped into {} ({:?}, normal = {})",
                step, center, contact.object, contact.region, contact.normal
            );

            break;
        }

        println!(
            "step {}: ball at {} rolls on {} triangle(s)",
            step,
            center,
            contacts.len()
        );

        center += velocity * 0.25;
    }
}
