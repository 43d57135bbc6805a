pub mod config;

use crate::geometry::{CombineOp, Solid, SolidKind};
use crate::math::*;
use crate::world::World;

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use anyhow::{anyhow, bail, Context};

// an op code at or above this value ends the solid records
pub const SENTINEL_OP: f64 = 9999.0;

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace(),
            consumed: 0,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.consumed += 1;
        Some(token)
    }

    fn real(&mut self, what: &str) -> anyhow::Result<f64> {
        let token = self
            .next_token()
            .ok_or_else(|| anyhow!("unexpected end of scene while reading {}", what))?;
        token.parse::<f64>().with_context(|| {
            format!(
                "token {} ({:?}) is not a number, expected {}",
                self.consumed, token, what
            )
        })
    }

    fn triple(&mut self, what: &str) -> anyhow::Result<[f64; 3]> {
        Ok([self.real(what)?, self.real(what)?, self.real(what)?])
    }

    fn code(&mut self, what: &str) -> anyhow::Result<i64> {
        let value = self.real(what)?;
        if value.fract() != 0.0 {
            bail!("{} must be an integer code, got {}", what, value);
        }
        Ok(value as i64)
    }
}

/// Parses the plain text scene format: a light direction, then `op kind ...` records until an
/// op of 9999 or more.
///
/// Spheres and cylinders read `radius px py pz r g b`, planes read `px py pz nx ny nz r g b`.
/// The light and plane normals are normalized here.
pub fn parse_scene(input: &str) -> anyhow::Result<World> {
    let mut tokens = Tokens::new(input);
    let light = Vec3::from(tokens.triple("light direction")?);

    let mut solids = Vec::new();
    loop {
        let op = match tokens.next_token() {
            Some(token) => token.parse::<f64>().with_context(|| {
                format!("solid {}: op code {:?} is not a number", solids.len(), token)
            })?,
            None => {
                warn!(
                    "scene ended after {} solids without the {} terminator",
                    solids.len(),
                    SENTINEL_OP
                );
                break;
            }
        };
        if op >= SENTINEL_OP {
            break;
        }
        if op.fract() != 0.0 {
            bail!(
                "solid {}: op code must be an integer, got {}",
                solids.len(),
                op
            );
        }
        let op = CombineOp::from_code(op as i64)
            .ok_or_else(|| anyhow!("solid {}: unknown op code {}", solids.len(), op))?;
        let kind_code = tokens.code("solid kind")?;
        let kind = SolidKind::from_code(kind_code)
            .ok_or_else(|| anyhow!("solid {}: unknown kind {}", solids.len(), kind_code))?;

        let solid = match kind {
            SolidKind::Sphere | SolidKind::Cylinder => {
                let radius = tokens.real("radius")?;
                let center = Vec3::from(tokens.triple("center")?);
                let color = RGBColor::from(tokens.triple("color")?);
                if kind == SolidKind::Sphere {
                    Solid::sphere(op, radius, center, color)
                } else {
                    Solid::cylinder(op, radius, center, color)
                }
            }
            SolidKind::Plane => {
                let point = Vec3::from(tokens.triple("plane point")?);
                let normal = Vec3::from(tokens.triple("plane normal")?);
                let color = RGBColor::from(tokens.triple("color")?);
                if normal.norm_squared() == 0.0 {
                    bail!(
                        "solid {}: plane normal must be a nonzero vector",
                        solids.len()
                    );
                }
                Solid::plane(op, point, normal.normalized(), color)
            }
        };
        debug!("parsed solid {}: {:?}", solids.len(), solid);
        solids.push(solid);
    }

    if solids.iter().skip(1).any(|solid| solid.kind == SolidKind::Plane) {
        warn!("planes after slot 0 are tested against the plane in slot 0");
    }
    World::new(solids, light)
}

pub fn construct_world<P: AsRef<Path>>(scene_file: P) -> anyhow::Result<World> {
    let scene_file = scene_file.as_ref();
    info!("loading scene file at {}", scene_file.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(scene_file)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| {
            format!(
                "failed to read scene file {}",
                scene_file.to_string_lossy()
            )
        })?;
    info!("done: {} bytes", read_count);

    let world = parse_scene(&input).with_context(|| {
        format!(
            "failed to parse scene file {}",
            scene_file.to_string_lossy()
        )
    })?;
    info!("scene has {} solids", world.len());
    Ok(world)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_all_kinds() {
        let world = parse_scene(
            "0 3 4
             0 1  0 -100 0  0 2 0  0.5 0.5 0.5
             2 0  60  0 0 0  1 0 0
             0 0  40  0 0 0  0 1 0
             0 2  10  200 0 0  0 0 1
             9999",
        )
        .unwrap();
        assert_eq!(world.len(), 4);
        assert!((world.light - Vec3::new(0.0, 0.6, 0.8)).norm() < 1e-12);

        let plane = world.solids[0];
        assert_eq!(plane.kind, SolidKind::Plane);
        assert_eq!(plane.position, Vec3::new(0.0, -100.0, 0.0));
        assert_eq!(plane.normal, Vec3::Y);

        assert_eq!(world.solids[1].op, CombineOp::Subtract);
        assert_eq!(world.solids[1].radius, 60.0);
        assert_eq!(world.solids[2].color, RGBColor::new(0.0, 1.0, 0.0));
        assert_eq!(world.solids[3].kind, SolidKind::Cylinder);
        assert_eq!(world.solids[3].position, Vec3::new(200.0, 0.0, 0.0));
    }

    #[test]
    fn test_immediate_sentinel() {
        let world = parse_scene("1 1 1 9999").unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn test_missing_sentinel_is_tolerated() {
        let world = parse_scene("0 1 0\n0 0 1 0 0 0 1 1 1\n").unwrap();
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_records_after_sentinel_are_ignored() {
        let world = parse_scene("0 1 0 9999 0 0 1 0 0 0 1 1 1").unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn test_errors() {
        // no light
        assert!(parse_scene("").is_err());
        assert!(parse_scene("0 0 0 9999").is_err());
        // unknown kind and op
        assert!(parse_scene("0 1 0 0 7 1 0 0 0 1 1 1 9999").is_err());
        assert!(parse_scene("0 1 0 5 0 1 0 0 0 1 1 1 9999").is_err());
        // truncated record
        assert!(parse_scene("0 1 0 0 0 1 0 0").is_err());
        // garbage
        assert!(parse_scene("0 1 0 0 0 one 0 0 0 1 1 1 9999").is_err());
        // degenerate plane
        assert!(parse_scene("0 1 0 0 1 0 0 0 0 0 0 1 1 1 9999").is_err());
    }

    #[test]
    fn test_shipped_scenes() {
        for name in ["input.txt", "csg.txt", "pillars.txt"] {
            let world = construct_world(format!("data/scenes/{}", name)).unwrap();
            assert!(!world.is_empty(), "{}", name);
        }
    }
}
