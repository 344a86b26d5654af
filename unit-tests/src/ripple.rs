use myrtio_matrix_composer::effect::render_frame;
use myrtio_matrix_composer::{AnimationPhase, Approach, Framebuffer, RadiusTracker, RippleEffect};

type Grid = Framebuffer<4, 4>;

fn floor_sqrt(sum: i32) -> i32 {
    f64::from(sum).sqrt().floor() as i32
}

/// Replays the renderer's scan order and checks the tracked root at every
/// row and every pixel.
fn check_scan(x_offset: i32, y_offset: i32, width: i32, height: i32) {
    let above = (-y_offset).clamp(0, height);
    let left = (-x_offset).clamp(0, width);
    let mut pixels = 0;

    let mut visit_row = |row: &RadiusTracker| {
        assert_eq!(row.root(), floor_sqrt(row.sum()), "row sum {}", row.sum());
        let mut column = *row;
        let mut visit_pixel = |pixel: &RadiusTracker| {
            assert_eq!(pixel.root(), floor_sqrt(pixel.sum()), "pixel sum {}", pixel.sum());
            pixels += 1;
        };
        column.sweep(Approach::Closing, x_offset, left, &mut visit_pixel);
        column.sweep(Approach::Receding, x_offset + left, width - left, &mut visit_pixel);
    };

    let mut row = RadiusTracker::seed(x_offset, y_offset);
    row.sweep(Approach::Closing, y_offset, above, &mut visit_row);
    row.sweep(Approach::Receding, y_offset + above, height - above, &mut visit_row);

    assert_eq!(pixels, width * height);
}

#[test]
fn tracked_root_is_floor_sqrt_everywhere() {
    for y_offset in -48..=16 {
        for x_offset in -48..=16 {
            check_scan(x_offset, y_offset, 32, 32);
        }
    }
    check_scan(-100, -3, 64, 8);
    check_scan(7, -90, 16, 64);
}

#[test]
fn centred_pattern_is_mirror_symmetric() {
    let mut frame = Grid::new();
    // centre on pixel (16, 16)
    render_frame(&mut frame, -16, -16, 0);

    let at = |x: usize, y: usize| frame.pixel(x, y).unwrap();
    for dy in 0..16 {
        for dx in 0..16 {
            let value = at(16 + dx, 16 + dy);
            assert_eq!(at(16 - dx, 16 + dy), value, "({dx}, {dy})");
            assert_eq!(at(16 + dx, 16 - dy), value, "({dx}, {dy})");
            assert_eq!(at(16 - dx, 16 - dy), value, "({dx}, {dy})");
        }
    }
    // rings are 8 units wide: the centre is dark, radius 8 is lit
    assert!(!at(16, 16));
    assert!(at(24, 16));
    assert!(at(16, 8));
}

#[test]
fn same_phase_renders_identical_frames() {
    let mut phase = AnimationPhase::new();
    for _ in 0..137 {
        phase.advance();
    }

    let mut first = Grid::new();
    let mut second = Grid::new();
    second.as_bytes_mut().fill(0x5A);
    RippleEffect::with_phase(phase).render(&mut first);
    RippleEffect::with_phase(phase).render(&mut second);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn animated_frames_match_direct_distance() {
    let mut effect = RippleEffect::new();
    let mut frame = Grid::new();
    for _ in 0..600 {
        effect.render(&mut frame);
        let phase = effect.phase();
        let (x_offset, y_offset) = phase.centre_offset::<4, 4>();
        for y in 0..Grid::HEIGHT {
            for x in 0..Grid::WIDTH {
                let dx = x_offset + x as i32;
                let dy = y_offset + y as i32;
                let root = floor_sqrt(dx * dx + dy * dy);
                let lit = (root + i32::from(phase.travel)) & 8 != 0;
                assert_eq!(frame.pixel(x, y), Some(lit));
            }
        }
    }
}

#[test]
fn rings_move_outward() {
    // with a fixed centre, lowering travel by one shifts every band edge
    // one unit outwards
    let mut before = Grid::new();
    let mut after = Grid::new();
    render_frame(&mut before, -16, -16, 10);
    render_frame(&mut after, -16, -16, 9);
    for x in 17..32 {
        assert_eq!(after.pixel(x, 16), before.pixel(x - 1, 16));
    }
}
