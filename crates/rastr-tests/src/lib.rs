//! Integration tests for rastr crates.
//!
//! End-to-end checks of the operation properties across the core, color
//! and ops crates, plus file-level runs through the CLI library.

#[cfg(test)]
mod tests {
    use rastr_core::{PixelBuffer, Region};
    use rastr_ops::composite::{add, binary_merge, blend, difference, weighted_merge};
    use rastr_ops::{BlendMode, Pivot, adjust, filter, normalize, resize, transform};
    use tempfile::tempdir;

    /// Deterministic pseudo-random BGR image.
    fn noise(width: u32, height: u32, seed: u64) -> PixelBuffer {
        let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let data = (0..width as u64 * height as u64 * 3)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                (state >> 56) as u8
            })
            .collect();
        PixelBuffer::from_data(width, height, 3, data).unwrap()
    }

    fn gray_noise(width: u32, height: u32, seed: u64) -> PixelBuffer {
        let bgr = noise(width, height, seed);
        let data = bgr.data().chunks(3).map(|px| px[1]).collect();
        PixelBuffer::from_data(width, height, 1, data).unwrap()
    }

    fn samples() -> Vec<PixelBuffer> {
        vec![
            noise(1, 1, 1),
            noise(7, 3, 2),
            noise(16, 16, 3),
            noise(31, 17, 4),
            gray_noise(12, 5, 5),
        ]
    }

    #[test]
    fn test_invert_self_inverse() {
        for img in samples() {
            let twice = adjust::invert(&adjust::invert(&img).unwrap()).unwrap();
            assert_eq!(twice, rastr_color::to_bgr(&img));
        }
    }

    #[test]
    fn test_flips_involutions() {
        for img in samples() {
            let bgr = rastr_color::to_bgr(&img);
            assert_eq!(transform::flip_h(&transform::flip_h(&img).unwrap()).unwrap(), bgr);
            assert_eq!(transform::flip_v(&transform::flip_v(&img).unwrap()).unwrap(), bgr);
        }
    }

    #[test]
    fn test_rotate90_four_times() {
        for img in samples() {
            let mut out = img.clone();
            for _ in 0..4 {
                out = transform::rotate_90_cw(&out).unwrap();
            }
            assert_eq!(out, rastr_color::to_bgr(&img));
        }
    }

    #[test]
    fn test_rotate90_matches_general_rotation_on_center_row() {
        // Off the center row, float error in cos(90) can move the truncation
        // by one pixel
        let img = noise(9, 9, 8);
        let quarter = transform::rotate_90_cw(&img).unwrap();
        let general = transform::rotate(&img, 90.0, Pivot::new(4, 4)).unwrap();
        let center_row = 4;
        assert_eq!(quarter.row(center_row), general.row(center_row));
    }

    #[test]
    fn test_threshold_only_black_and_white() {
        for img in samples() {
            for t in [-500, 0, 1, 100, 254, 255, 1000] {
                let out = adjust::threshold(&img, t).unwrap();
                assert!(
                    out.data()
                        .chunks(3)
                        .all(|px| px == [0, 0, 0] || px == [255, 255, 255])
                );
            }
        }
    }

    #[test]
    fn test_filters_radius_zero_identity() {
        for img in samples() {
            let bgr = rastr_color::to_bgr(&img);
            assert_eq!(filter::blur(&img, 0).unwrap(), bgr);
            assert_eq!(filter::erode(&img, 0).unwrap(), bgr);
            assert_eq!(filter::dilate(&img, 0).unwrap(), bgr);
        }
    }

    #[test]
    fn test_add_monotonic_in_both_inputs() {
        let a = noise(10, 10, 20);
        let b = noise(10, 10, 21);
        let brighter_a = adjust::brightness(&a, 30).unwrap();
        let brighter_b = adjust::brightness(&b, 30).unwrap();

        let base = add(&a, &b).unwrap();
        let up_a = add(&brighter_a, &b).unwrap();
        let up_b = add(&a, &brighter_b).unwrap();
        for ((&v, &va), &vb) in base.data().iter().zip(up_a.data()).zip(up_b.data()) {
            assert!(va >= v && vb >= v);
        }
    }

    #[test]
    fn test_difference_self_black() {
        for img in samples() {
            let out = difference(&img, &img).unwrap();
            assert!(out.data().iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_merge_boundaries() {
        let a = noise(12, 9, 30);
        let b = noise(12, 9, 31);
        let zero = PixelBuffer::filled(5, 5, &[0]);
        let nonzero = PixelBuffer::filled(5, 5, &[3]);
        let full = PixelBuffer::filled(40, 40, &[255]);

        assert_eq!(binary_merge(&a, &b, &zero).unwrap(), a);
        assert_eq!(binary_merge(&a, &b, &nonzero).unwrap(), b);
        assert_eq!(weighted_merge(&a, &b, &zero).unwrap(), b);
        assert_eq!(weighted_merge(&a, &b, &full).unwrap(), a);
    }

    #[test]
    fn test_brightness_examples() {
        let img = PixelBuffer::filled(4, 4, &[100, 100, 100]);
        assert_eq!(
            adjust::brightness(&img, 200).unwrap(),
            PixelBuffer::filled(4, 4, &[255, 255, 255])
        );
        assert_eq!(
            adjust::brightness(&img, -150).unwrap(),
            PixelBuffer::filled(4, 4, &[0, 0, 0])
        );
    }

    #[test]
    fn test_crop_example() {
        let img = noise(10, 10, 40);
        let out = transform::crop(&img, Region::new(2, 2, 6, 6)).unwrap();
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.pixel(0, 0), img.pixel(2, 2));
    }

    #[test]
    fn test_normalizer_example() {
        // 5x5 and 8x3 as rows x cols
        let a = noise(5, 5, 50);
        let b = noise(3, 8, 51);
        let out = normalize::normalize(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(out.len(), 2);
        for img in &out {
            assert_eq!((img.height(), img.width()), (5, 3));
        }
        assert_eq!(out[0].pixel(2, 4), a.pixel(2, 4));
        assert_eq!(out[1].pixel(2, 4), b.pixel(2, 4));
    }

    #[test]
    fn test_every_blend_mode_crops_to_common_size() {
        let a = noise(9, 4, 60);
        let b = gray_noise(5, 7, 61);
        for mode in BlendMode::ALL {
            let out = blend(&a, &b, mode).unwrap();
            assert_eq!(out.dimensions(), (5, 4), "{}", mode);
            assert_eq!(out.channels(), 3);
        }
    }

    #[test]
    fn test_resize_then_crop_commutes_for_integer_factor() {
        let img = noise(6, 4, 70);
        let up = resize::resize(&img, 12, 8).unwrap();
        let quarter = transform::crop(&up, Region::new(0, 0, 4, 6)).unwrap();
        let direct = resize::resize(
            &transform::crop(&img, Region::new(0, 0, 2, 3)).unwrap(),
            6,
            4,
        )
        .unwrap();
        assert_eq!(quarter, direct);
    }

    #[test]
    fn test_contrast_identity_on_achromatic_extremes() {
        let img = PixelBuffer::from_data(3, 1, 1, vec![0, 128, 255]).unwrap();
        let out = adjust::contrast(&img, 0).unwrap();
        assert_eq!(out, rastr_color::to_bgr(&img));
    }

    #[test]
    fn test_recipe_file_round_trip() {
        use rastr_cli::{Recipe, load_image, save_image};

        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let recipe_path = dir.path().join("recipe.yaml");
        let output = dir.path().join("out.png");

        let img = noise(20, 14, 80);
        save_image(&input, &img).unwrap();
        std::fs::write(
            &recipe_path,
            "name: test\nsteps:\n  - op: translate\n    dx: -3\n    dy: 5\n  - op: dilate\n    radius: 1\n  - op: resize\n    width: 10\n    height: 7\n",
        )
        .unwrap();

        let recipe = Recipe::from_file(&recipe_path).unwrap();
        let result = recipe.apply(&load_image(&input).unwrap()).unwrap();
        save_image(&output, &result).unwrap();

        let expected = resize::resize(
            &filter::dilate(&transform::translate(&img, -3, 5).unwrap(), 1).unwrap(),
            10,
            7,
        )
        .unwrap();
        assert_eq!(load_image(&output).unwrap(), expected);
    }

    #[test]
    fn test_gray_file_stays_gray_until_processed() {
        use rastr_cli::{load_image, save_image};

        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let gray = gray_noise(8, 8, 90);
        save_image(&path, &gray).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, gray);
        assert_eq!(adjust::invert(&loaded).unwrap().channels(), 3);
    }
}
