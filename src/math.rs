use num::Float;

/// Piecewise linear interpolation of `x_input` over the sorted `coords`,
/// holding the end values outside of their range. Similar to numpy.interp
pub(crate) fn interp<F: Float>(
    x_input: impl IntoIterator<Item = F>,
    coords: impl IntoIterator<Item = (F, F)>,
) -> Vec<F> {
    let coords: Vec<(F, F)> = coords.into_iter().collect();

    x_input
        .into_iter()
        .map(|x| {
            let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) = (coords.first(), coords.last()) else {
                return F::zero();
            };

            if x <= first_x {
                return first_y;
            }
            if x >= last_x {
                return last_y;
            }

            for window in coords.windows(2) {
                let ((x1, y1), (x2, y2)) = (window[0], window[1]);

                if x1 <= x && x <= x2 {
                    if x2 == x1 {
                        return y2;
                    }

                    return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
                }
            }

            last_y
        })
        .collect()
}

/// Trapezoidal area of each segment between consecutive samples.
pub(crate) fn segment_areas<F: Float>(universe: &[F], membership: &[F]) -> Vec<F> {
    let two = F::one() + F::one();

    universe
        .windows(2)
        .zip(membership.windows(2))
        .map(|(u, m)| (m[0] + m[1]) * (u[1] - u[0]) / two)
        .collect()
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];

    assert_eq!(
        interp(x, xs.into_iter().zip(ys)),
        vec![3., 3., 2.5, 0.5599999999999996, 0.]
    );

    let x = [2.5, -1., 7.5];
    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];

    assert_eq!(interp(x, xs.into_iter().zip(ys)), vec![4., 0., 2.]);
}

#[test]
fn test_segment_areas() {
    let universe = [0., 1., 2., 4.];
    let membership = [0., 1., 1., 0.];

    assert_eq!(segment_areas(&universe, &membership), vec![0.5, 1., 1.]);
}
