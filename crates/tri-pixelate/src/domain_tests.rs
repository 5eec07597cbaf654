//! Domain-critical regression tests for tri-pixelate.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{pixelate, PixelateOptions, Pixelator};
    use crate::color::{ColorOps, MeanColor, Rgba};
    use crate::geometry::{classify, Quadrant, TileDimension};
    use crate::raster::Raster;
    use crate::tile::{select_orientation, Orientation, QuadrantAverages, TriangleMode};
    use crate::tiling::LayoutMode;
    use pretty_assertions::assert_eq;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    fn is_blend(px: Rgba, a: Rgba, b: Rgba) -> bool {
        px == MeanColor.average(&[a, b])
    }

    /// Paint one `size x size` tile at (`x0`, `y0`) with `white` wedges white
    /// and everything else black.
    fn paint_wedges(raster: &mut Raster, x0: usize, y0: usize, size: usize, white: &[Quadrant]) {
        let dim = TileDimension::square(size).unwrap();
        for dy in 0..size {
            for dx in 0..size {
                let color = match classify(dx, dy, dim) {
                    Some(q) if white.contains(&q) => Rgba::WHITE,
                    _ => Rgba::BLACK,
                };
                raster.set(x0 + dx, y0 + dy, color);
            }
        }
    }

    // ========================================================================
    // Degenerate input: a flat image must survive unchanged
    // ========================================================================

    /// If this breaks, it means: averaging or merging is drifting colors even
    /// when every sample is identical (e.g. the diagonal is painted with a
    /// fallback color, or averaging is truncating instead of rounding).
    #[test]
    fn test_solid_red_is_unchanged() {
        let source = Raster::filled(4, 4, RED);
        let options = PixelateOptions::new(TileDimension::square(2).unwrap())
            .triangle_mode(TriangleMode::Both)
            .layout(LayoutMode::Cropped)
            .aliased(true);

        let out = pixelate(&source, &options, &MeanColor).unwrap();

        assert_eq!((out.width(), out.height()), (4, 4));
        assert!(out.pixels().iter().all(|&px| px == RED));
    }

    // ========================================================================
    // Tie-break: symmetric quadrants must select backslash
    // ========================================================================

    /// If this breaks, it means: the `Both` comparison was "simplified" from
    /// strict `<` to `<=`, flipping every symmetric tile to slash.
    #[test]
    fn test_identical_quadrants_select_backslash() {
        for color in [Rgba::TRANSPARENT, Rgba::BLACK, RED, Rgba::new(9, 99, 199, 40)] {
            let averages = QuadrantAverages::uniform(color);
            assert_eq!(
                select_orientation(&averages, TriangleMode::Both, &MeanColor),
                Orientation::Backslash,
                "uniform {color:?}"
            );
        }
    }

    /// If this breaks, it means: a flat tile no longer paints its blended
    /// anti-diagonal, so the backslash tie-break is not reaching the renderer.
    #[test]
    fn test_symmetric_tile_renders_as_backslash() {
        // top/bottom wedges white, left/right black: top is equally far from both sides
        let mut source = Raster::filled(4, 4, Rgba::BLACK);
        paint_wedges(&mut source, 0, 0, 4, &[Quadrant::Top, Quadrant::Bottom]);

        let out = Pixelator::new(TileDimension::square(4).unwrap())
            .pixelate(&source)
            .unwrap();

        let grey = MeanColor.average(&[Rgba::WHITE, Rgba::BLACK]);
        // every pixel is either a merged grey or the blend of two greys
        assert!(out.pixels().iter().all(|&px| px == grey));
    }

    // ========================================================================
    // Diagonal blend: the 2x2 slash split
    // ========================================================================

    /// If this breaks, it means: the slash renderer lost its `==` branch and
    /// the diagonal pixels snap to one triangle even with aliasing off.
    #[test]
    fn test_two_by_two_slash_blends_diagonal() {
        let mut source = Raster::filled(2, 2, Rgba::BLACK);
        source.set(0, 0, Rgba::WHITE);
        let options = PixelateOptions::new(TileDimension::square(2).unwrap())
            .triangle_mode(TriangleMode::Right)
            .aliased(false);

        let out = pixelate(&source, &options, &MeanColor).unwrap();

        // (1, 0) is the only bottom-wedge pixel, (0, 1) the only left-wedge
        // pixel; top and right are empty and average to transparent.
        let upper = MeanColor.average(&[Rgba::TRANSPARENT, Rgba::TRANSPARENT]);
        let lower = MeanColor.average(&[Rgba::BLACK, Rgba::BLACK]);
        assert_eq!(out.at(0, 1), upper);
        assert_eq!(out.at(1, 0), lower);
        // the `/` split in y-up terms runs through (0, 0) and (1, 1)
        assert!(is_blend(out.at(0, 0), upper, lower));
        assert!(is_blend(out.at(1, 1), upper, lower));
    }

    /// If this breaks, it means: the blended middle color is no longer the
    /// average of the two triangle colors.
    #[test]
    fn test_white_black_split_blends_to_grey() {
        // top + right wedges white, bottom + left black: a clean slash tile
        let mut source = Raster::filled(6, 6, Rgba::BLACK);
        paint_wedges(&mut source, 0, 0, 6, &[Quadrant::Top, Quadrant::Right]);
        let options = PixelateOptions::new(TileDimension::square(6).unwrap())
            .triangle_mode(TriangleMode::Right);

        let out = pixelate(&source, &options, &MeanColor).unwrap();

        let grey = MeanColor.average(&[Rgba::WHITE, Rgba::BLACK]);
        for d in 0..6 {
            assert_eq!(out.at(d, d), grey, "diagonal ({d}, {d})");
        }
        assert_eq!(out.at(0, 5), Rgba::WHITE);
        assert_eq!(out.at(5, 0), Rgba::BLACK);
    }

    // ========================================================================
    // Diagonal alignment across tiles with opposite orientations
    // ========================================================================

    /// If this breaks, it means: slash and backslash stopped using the same
    /// centre shift or the opposite comparison senses, so `/` and `\` tiles
    /// side by side meet with an offset instead of at a shared corner.
    ///
    /// The source is a checkerboard of slash-favouring and
    /// backslash-favouring tiles. For a square tile of size `s` at
    /// (`x0`, `y0`), slash blends pixels `(x0 + d, y0 + d)` and backslash
    /// blends `(x0 + d, y0 + s - d)`. Both diagonals therefore run corner to
    /// corner on the tile lattice, and neighbours meet on lattice points.
    #[test]
    fn test_opposite_orientations_meet_on_tile_corners() {
        let s = 4;
        let (cols, rows) = (4, 2);
        let mut source = Raster::filled(cols * s, rows * s, Rgba::BLACK);
        for row in 0..rows {
            for col in 0..cols {
                let white = if (row + col) % 2 == 0 {
                    [Quadrant::Top, Quadrant::Right]
                } else {
                    [Quadrant::Top, Quadrant::Left]
                };
                paint_wedges(&mut source, col * s, row * s, s, &white);
            }
        }

        let out = Pixelator::new(TileDimension::square(s).unwrap())
            .pixelate(&source)
            .unwrap();
        let grey = MeanColor.average(&[Rgba::WHITE, Rgba::BLACK]);

        for row in 0..rows {
            for col in 0..cols {
                let (x0, y0) = (col * s, row * s);
                let blended: Vec<(usize, usize)> = (0..s)
                    .flat_map(|dy| (0..s).map(move |dx| (dx, dy)))
                    .filter(|&(dx, dy)| out.at(x0 + dx, y0 + dy) == grey)
                    .collect();

                let expected: Vec<(usize, usize)> = if (row + col) % 2 == 0 {
                    (0..s).map(|d| (d, d)).collect()
                } else {
                    let mut v: Vec<_> = (1..s).map(|d| (d, s - d)).collect();
                    v.sort_by_key(|&(dx, dy)| (dy, dx));
                    v
                };
                assert_eq!(blended, expected, "tile ({col}, {row})");
            }
        }
    }

    /// If this breaks, it means: one orientation's diagonal is shifted by a
    /// pixel relative to the other.
    ///
    /// Mirroring `x` about the integer centre (`x' = 2 * (w / 2) - x`) maps
    /// the slash boundary onto the backslash boundary.
    #[test]
    fn test_slash_and_backslash_diagonals_mirror() {
        for (w, h) in [(4, 4), (5, 5), (6, 3), (8, 4), (3, 6)] {
            let dim = TileDimension::new(w, h).unwrap();
            let mut source = Raster::filled(w, h, Rgba::BLACK);
            paint_distinct_wedges(&mut source, dim);

            let render = |mode| {
                Pixelator::new(dim)
                    .triangle_mode(mode)
                    .pixelate(&source)
                    .unwrap()
            };
            let slash = render(TriangleMode::Right);
            let backslash = render(TriangleMode::Left);
            let slash_blend = blend_color(&slash).expect("slash tile has a diagonal");
            let backslash_blend = blend_color(&backslash).expect("backslash tile has a diagonal");

            let centre = 2 * (w / 2);
            for y in 0..h {
                for x in 0..w {
                    let Some(mx) = centre.checked_sub(x).filter(|&mx| mx < w) else {
                        continue;
                    };
                    assert_eq!(
                        slash.at(x, y) == slash_blend,
                        backslash.at(mx, y) == backslash_blend,
                        "{w}x{h}: ({x}, {y}) vs ({mx}, {y})"
                    );
                }
            }
        }
    }

    /// Give every wedge a distinct color so neither triangle color equals
    /// the boundary blend.
    fn paint_distinct_wedges(raster: &mut Raster, dim: TileDimension) {
        for y in 0..dim.height() {
            for x in 0..dim.width() {
                let color = match classify(x, y, dim) {
                    Some(Quadrant::Top) => RED,
                    Some(Quadrant::Right) => GREEN,
                    Some(Quadrant::Bottom) => BLUE,
                    Some(Quadrant::Left) => Rgba::WHITE,
                    None => Rgba::BLACK,
                };
                raster.set(x, y, color);
            }
        }
    }

    /// The one color of a single-tile output that is the average of the
    /// other two.
    fn blend_color(out: &Raster) -> Option<Rgba> {
        let mut colors: Vec<Rgba> = out.pixels().to_vec();
        colors.sort_by_key(|c| c.to_bytes());
        colors.dedup();
        if colors.len() != 3 {
            return None;
        }
        colors.iter().copied().find(|&c| {
            let others: Vec<Rgba> = colors.iter().copied().filter(|&o| o != c).collect();
            c == MeanColor.average(&others)
        })
    }

    // ========================================================================
    // Fitted layout keeps the source size
    // ========================================================================

    /// If this breaks, it means: the fitted layout is cropping (or padding)
    /// instead of shrinking its edge tiles.
    #[test]
    fn test_fitted_output_matches_source_size() {
        let (w, h) = (10, 7);
        let mut source = Raster::filled(w, h, RED);
        for y in 0..h {
            for x in 8..w {
                source.set(x, y, GREEN);
            }
        }

        let out = Pixelator::new(TileDimension::square(4).unwrap())
            .layout(LayoutMode::Fitted)
            .pixelate(&source)
            .unwrap();

        assert_eq!((out.width(), out.height()), (w, h));
        // edge tiles are computed from their own pixels only
        for y in 0..h {
            for x in 8..w {
                assert_eq!(out.at(x, y).r, 0, "red leaked into edge pixel ({x}, {y})");
            }
            for x in 0..8 {
                assert_eq!(out.at(x, y).g, 0, "green leaked into pixel ({x}, {y})");
            }
        }
    }

    /// If this breaks, it means: the cropped layout started keeping the
    /// remainder strip.
    #[test]
    fn test_cropped_output_is_tile_multiple() {
        let source = Raster::filled(10, 7, RED);
        let out = Pixelator::new(TileDimension::new(4, 3).unwrap())
            .pixelate(&source)
            .unwrap();
        assert_eq!((out.width(), out.height()), (8, 6));
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: tile work is racing on shared state, or the
    /// output depends on completion order or pool size.
    #[test]
    fn test_repeat_runs_are_byte_identical() {
        let (w, h) = (37, 23);
        let pixels: Vec<Rgba> = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                Rgba::new((x * 7) as u8, (y * 11) as u8, ((x ^ y) * 5) as u8, 255)
            })
            .collect();
        let source = Raster::from_pixels(w, h, pixels).unwrap();

        for layout in [LayoutMode::Cropped, LayoutMode::Fitted, LayoutMode::Stretched] {
            let options = PixelateOptions::new(TileDimension::new(5, 3).unwrap()).layout(layout);
            let first = pixelate(&source, &options, &MeanColor).unwrap();
            let second = pixelate(&source, &options, &MeanColor).unwrap();
            let single = pixelate(&source, &options.threads(Some(1)), &MeanColor).unwrap();

            assert_eq!(first.to_rgba8(), second.to_rgba8(), "{layout:?}");
            assert_eq!(first.to_rgba8(), single.to_rgba8(), "{layout:?}");
        }
    }

    // ========================================================================
    // Empty buckets
    // ========================================================================

    /// If this breaks, it means: a tile with an unsampled wedge fails or
    /// panics instead of using the averaging fallback.
    #[test]
    fn test_one_pixel_wide_tiles_do_not_fail() {
        let source = Raster::filled(3, 4, BLUE);
        let out = Pixelator::new(TileDimension::new(1, 4).unwrap())
            .pixelate(&source)
            .unwrap();
        assert_eq!((out.width(), out.height()), (3, 4));
    }
}
