/// Horizontal extent of one slot in the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub width: f32,
}

impl Span {
    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Places `widths` left to right with a fixed `gap`, centred on x = 0.
///
/// Slots keep their own width, so growing one slot pushes every slot after it
/// to the right and, through the centring, every slot before it to the left.
pub fn flow_row(widths: &[f32], gap: f32) -> (Vec<Span>, f32) {
    let gap = gap.max(0.0);
    let widths = widths.iter().map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 });

    let total: f32 = widths.clone().sum::<f32>() + gap * widths.len().saturating_sub(1) as f32;

    let mut cursor = -total / 2.0;
    let spans = widths
        .map(|width| {
            let span = Span {
                left: cursor,
                width,
            };
            cursor += width + gap;
            span
        })
        .collect();

    (spans, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_overlap(spans: &[Span], gap: f32) {
        for pair in spans.windows(2) {
            assert!(
                pair[0].right() + gap <= pair[1].left + 1e-3,
                "{:?} overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn uniform_row_is_centred() {
        let (spans, total) = flow_row(&[40.0; 3], 6.0);
        assert_eq!(total, 132.0);
        assert_eq!(spans[0].left, -66.0);
        assert_eq!(spans[1].center(), 0.0);
        assert_eq!(spans[2].right(), 66.0);
    }

    #[test]
    fn growth_pushes_neighbours_apart() {
        let (before, _) = flow_row(&[40.0, 40.0, 40.0, 40.0], 6.0);
        let (after, _) = flow_row(&[40.0, 64.0, 40.0, 40.0], 6.0);
        assert!(after[0].left < before[0].left);
        assert!(after[2].left > before[2].left);
        assert!(after[3].left > before[3].left);
        assert_no_overlap(&after, 6.0);
    }

    #[test]
    fn symmetric_growth_keeps_middle_centre() {
        let (before, _) = flow_row(&[40.0, 40.0, 40.0, 40.0, 40.0, 2.0, 40.0], 6.0);
        let (after, _) = flow_row(&[40.0, 49.6, 64.0, 49.6, 40.0, 2.0, 40.0], 6.0);
        assert!((after[2].center() - before[2].center()).abs() < 1e-3);
        assert_no_overlap(&after, 6.0);
    }

    #[test]
    fn varied_widths_never_overlap() {
        let mut widths = Vec::new();
        for i in 0..11 {
            widths.push(40.0 + ((i * 7) % 25) as f32);
        }
        for gap in [0.0, 2.0, 6.0] {
            let (spans, total) = flow_row(&widths, gap);
            assert_no_overlap(&spans, gap);
            let covered = spans.last().unwrap().right() - spans[0].left;
            assert!((covered - total).abs() < 1e-3);
        }
    }

    #[test]
    fn bad_widths_collapse_to_zero() {
        let (spans, total) = flow_row(&[f32::NAN, -5.0, 10.0], 0.0);
        assert_eq!(total, 10.0);
        assert_eq!(spans[0].width, 0.0);
        assert_eq!(spans[1].width, 0.0);
    }

    #[test]
    fn empty_row() {
        let (spans, total) = flow_row(&[], 6.0);
        assert!(spans.is_empty());
        assert_eq!(total, 0.0);
    }
}
