/// Evenly spaced samples over `[min, max]`, both ends included.
pub struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 { (max - min) / (n - 1) as f64 } else { 0. };

        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }

    /// Samples `min, min + step, ...` up to and including `max`. When `max` is
    /// not a whole number of steps away from `min` it is appended as the last sample.
    ///
    /// Returns `None` when the sample count does not fit in a `usize`.
    pub fn stepped(min: f64, max: f64, step: f64) -> Option<Vec<f64>> {
        // Tolerance so that e.g. (5.0 - 0.5) / 0.5 is not floored to 8
        let spans = ((max - min) / step + 1e-9).floor();

        if !(spans >= 0. && spans < usize::MAX as f64) {
            return None;
        }

        let whole_steps = spans as usize;
        let last = min + step * whole_steps as f64;
        let mut samples: Vec<f64> = Linspace::new(min, last, whole_steps.checked_add(1)?).collect();

        if max - last > step * 1e-9 {
            samples.push(max);
        } else if let Some(end) = samples.last_mut() {
            // Snap accumulated rounding so the bound itself is sampled
            *end = max;
        }

        Some(samples)
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;

            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    let samples: Vec<_> = Linspace::new(0., 10., 11).collect();

    assert_eq!(samples.len(), 11);
    assert_eq!(samples[0], 0.);
    assert_eq!(samples[5], 5.);
    assert_eq!(samples[10], 10.);
    assert_eq!(Linspace::new(3., 7., 1).collect::<Vec<_>>(), vec![3.]);
}

#[test]
fn test_stepped() {
    assert_eq!(Linspace::stepped(50., 80., 5.).unwrap(), vec![50., 55., 60., 65., 70., 75., 80.]);
    assert_eq!(Linspace::stepped(0.5, 5., 0.5).unwrap().len(), 10);
    assert_eq!(Linspace::stepped(0.5, 5., 0.5).unwrap().last(), Some(&5.));
    assert_eq!(Linspace::stepped(0., 1., 0.4).unwrap(), vec![0., 0.4, 0.8, 1.]);
}

#[test]
fn test_stepped_overflow() {
    assert_eq!(Linspace::stepped(0., 1e300, 1e-10), None);
    assert_eq!(Linspace::stepped(-f64::MAX, f64::MAX, 1.), None);
    assert_eq!(Linspace::stepped(0., 1., f64::NAN), None);
}
