//! Headless integration tests: a minimal Bevy app driving the fly-over tick
//! once per update (no timer, so each `update()` is exactly one tick).

use bevy::app::App;
use bevy::prelude::*;

use crate::config::SCROLL_STEP;
use crate::flyover::advance_flyover;
use crate::{Heightfield, NoiseField, ScrollOffset};

/// A windowless app wrapping the terrain resources for deterministic ticking.
struct FlyoverRig {
    app: App,
}

impl FlyoverRig {
    fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        let noise = NoiseField::default();
        app.insert_resource(Heightfield::sampled(&noise, 0.0));
        app.insert_resource(noise);
        app.init_resource::<ScrollOffset>();
        // Registered without the on_timer condition so ticks are
        // deterministic regardless of wall-clock time.
        app.add_systems(Update, advance_flyover);

        Self { app }
    }

    fn tick(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    fn offset(&self) -> f32 {
        self.app.world().resource::<ScrollOffset>().value
    }

    fn field(&self) -> Heightfield {
        self.app.world().resource::<Heightfield>().clone()
    }
}

#[test]
fn run_n_ticks_scrolls_offset_to_minus_step_times_n() {
    let mut rig = FlyoverRig::new();
    rig.tick(100);
    let expected = -SCROLL_STEP * 100.0;
    assert!(
        (rig.offset() - expected).abs() < 1e-3,
        "expected offset {expected}, got {}",
        rig.offset()
    );
}

#[test]
fn ticking_keeps_lattice_dimensions_fixed() {
    let mut rig = FlyoverRig::new();
    rig.tick(25);
    let field = rig.field();
    assert_eq!(field.points_per_axis(), 42);
    assert_eq!(field.len(), 42 * 42);
}

#[test]
fn surface_moves_between_ticks() {
    let mut rig = FlyoverRig::new();
    rig.tick(1);
    let first = rig.field();
    rig.tick(1);
    let second = rig.field();

    let n = first.points_per_axis();
    let moved = (0..n).any(|i| (0..n).any(|j| first.height(i, j) != second.height(i, j)));
    assert!(moved, "consecutive ticks should produce different surfaces");
}
