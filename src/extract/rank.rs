//! Frequency ranking of colours in a single image.

use std::cmp::Reverse;
use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::types::Colour;

/// Resample `image` to a `sample × sample` square for counting.
///
/// Images that already have that size are counted as-is.
pub fn sample_image(image: &RgbImage, sample: u32) -> RgbImage {
    let sample = sample.max(1);
    if image.dimensions() == (sample, sample) {
        return image.clone();
    }
    imageops::resize(image, sample, sample, FilterType::CatmullRom)
}

/// Count every pixel of `image` by exact RGB value.
pub fn count_colours(image: &RgbImage) -> HashMap<Colour, usize> {
    let mut counts: HashMap<Colour, usize> = HashMap::new();
    for pixel in image.pixels() {
        *counts.entry(Colour::from(*pixel)).or_insert(0) += 1;
    }
    counts
}

/// Return up to `limit` distinct colours of `image`, most frequent first.
///
/// Equal counts are ordered by colour, highest channel values first
/// (compared as `r`, then `g`, then `b`).
pub fn rank(image: &RgbImage, sample: u32, limit: usize) -> Vec<Colour> {
    if image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    let resized = sample_image(image, sample);
    let mut colours: Vec<(Colour, usize)> = count_colours(&resized).into_iter().collect();
    colours.sort_by_key(|&(colour, count)| Reverse((count, colour)));

    colours
        .into_iter()
        .take(limit)
        .map(|(colour, _)| colour)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const RED: Colour = Colour::rgb(255, 0, 0);
    const GREEN: Colour = Colour::rgb(0, 255, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);

    #[test]
    fn test_uniform_image_yields_one_colour() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 0, 0]));
        assert_eq!(rank(&img, 80, 6), vec![RED]);
        assert_eq!(rank(&img, 4, 6), vec![RED]);
    }

    #[test]
    fn test_two_by_two_ranks_by_count() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 0, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.put_pixel(1, 1, Rgb([0, 255, 0]));

        // blue and green tie at one pixel each; green has the higher g channel
        assert_eq!(rank(&img, 2, 2), vec![RED, GREEN]);
        assert_eq!(rank(&img, 2, 3), vec![RED, GREEN, BLUE]);
    }

    #[test]
    fn test_limit_caps_output() {
        let mut img = RgbImage::new(4, 1);
        for x in 0..4 {
            img.put_pixel(x, 0, Rgb([x as u8 * 60, 0, 0]));
        }
        // sample 4 keeps the 4x1 content distinct after resampling to 4x4
        let ranked = rank(&img, 4, 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let img = RgbImage::from_fn(37, 23, |x, y| Rgb([(x * 7) as u8, (y * 11) as u8, 128]));
        let first = rank(&img, 16, 8);
        let second = rank(&img, 16, 8);
        assert_eq!(first, second);
        assert!(first.len() <= 8);
    }

    #[test]
    fn test_sample_image_size() {
        let img = RgbImage::from_pixel(30, 10, Rgb([1, 2, 3]));
        assert_eq!(sample_image(&img, 8).dimensions(), (8, 8));
        assert_eq!(sample_image(&img, 0).dimensions(), (1, 1));
    }

    #[test]
    fn test_count_colours() {
        let mut img = RgbImage::from_pixel(3, 1, Rgb([0, 0, 0]));
        img.put_pixel(2, 0, Rgb([255, 255, 255]));

        let counts = count_colours(&img);
        assert_eq!(counts[&Colour::BLACK], 2);
        assert_eq!(counts[&Colour::WHITE], 1);
    }

    #[test]
    fn test_empty_image() {
        let img = RgbImage::new(0, 0);
        assert!(rank(&img, 8, 4).is_empty());
    }
}
