//! Reconstruction stage: rejoins surviving fragments whose endpoints coincide back into
//! contiguous polylines for output.
use crate::core::{
    math::{dist_squared, Vector2},
    traits::Real,
};

/// Greedily joins fragments whose endpoints coincide within `join_distance` into polylines.
///
/// A fragment joins the chain when its start coincides with the chain's tail (appended, minus
/// the duplicated first point) or its end coincides with the chain's head (prepended, minus the
/// duplicated last point). Joining is exhaustive per starting fragment: the chain keeps
/// extending until no unused fragment connects. Each fragment is consumed at most once;
/// scanning is in list order, ties resolved by first match found.
pub fn reconstruct_polylines<T>(
    fragments: Vec<Vec<Vector2<T>>>,
    join_distance: T,
) -> Vec<Vec<Vector2<T>>>
where
    T: Real,
{
    let join_dist_squared = join_distance * join_distance;
    let mut remaining: Vec<Option<Vec<Vector2<T>>>> = fragments
        .into_iter()
        .map(|f| (f.len() > 1).then_some(f))
        .collect();

    let mut result = Vec::new();

    for i in 0..remaining.len() {
        let Some(mut chain) = remaining[i].take() else {
            continue;
        };

        loop {
            let head = chain[0];
            let tail = *chain.last().expect("chain is never empty");

            let connection = remaining.iter().enumerate().find_map(|(j, slot)| {
                let fragment = slot.as_ref()?;
                if dist_squared(tail, fragment[0]) <= join_dist_squared {
                    Some((j, false))
                } else if dist_squared(*fragment.last().expect("fragment has points"), head)
                    <= join_dist_squared
                {
                    Some((j, true))
                } else {
                    None
                }
            });

            let Some((j, prepend)) = connection else {
                break;
            };

            let fragment = remaining[j].take().expect("connected fragment is present");
            if prepend {
                let mut new_chain = fragment;
                new_chain.extend(chain.into_iter().skip(1));
                chain = new_chain;
            } else {
                chain.extend(fragment.into_iter().skip(1));
            }
        }

        result.push(chain);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(points: &[(f64, f64)]) -> Vec<Vector2<f64>> {
        points.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
    }

    #[test]
    fn collinear_fragments_chain_in_any_order() {
        let parts = [
            frag(&[(0.0, 0.0), (10.0, 0.0)]),
            frag(&[(10.0, 0.0), (20.0, 0.0)]),
            frag(&[(20.0, 0.0), (30.0, 0.0)]),
        ];
        let expected = frag(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);

        for order in [[0, 1, 2], [1, 0, 2], [2, 1, 0], [1, 2, 0], [2, 0, 1]] {
            let fragments: Vec<_> = order.iter().map(|&k| parts[k].clone()).collect();
            let result = reconstruct_polylines(fragments, 1.0);
            assert_eq!(result.len(), 1, "order {:?}", order);
            assert_eq!(result[0], expected, "order {:?}", order);
        }
    }

    #[test]
    fn distant_fragments_stay_apart() {
        let fragments = vec![
            frag(&[(0.0, 0.0), (10.0, 0.0)]),
            frag(&[(15.0, 0.0), (30.0, 0.0)]),
        ];
        let result = reconstruct_polylines(fragments, 1.0);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn near_endpoints_join_within_tolerance() {
        let fragments = vec![
            frag(&[(0.0, 0.0), (10.0, 0.0)]),
            frag(&[(10.5, 0.2), (30.0, 0.0)]),
        ];
        let result = reconstruct_polylines(fragments, 1.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 3);
    }

    #[test]
    fn each_fragment_consumed_once() {
        // two candidate continuations from the same tail, first in list order wins
        let fragments = vec![
            frag(&[(0.0, 0.0), (10.0, 0.0)]),
            frag(&[(10.0, 0.0), (10.0, 20.0)]),
            frag(&[(10.0, 0.0), (10.0, -20.0)]),
        ];
        let result = reconstruct_polylines(fragments, 1.0);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], frag(&[(0.0, 0.0), (10.0, 0.0), (10.0, 20.0)]));
        assert_eq!(result[1], frag(&[(10.0, 0.0), (10.0, -20.0)]));
    }

    #[test]
    fn closed_ring_of_fragments_chains_fully() {
        let fragments = vec![
            frag(&[(0.0, 0.0), (10.0, 0.0)]),
            frag(&[(10.0, 0.0), (10.0, 10.0)]),
            frag(&[(10.0, 10.0), (0.0, 10.0)]),
            frag(&[(0.0, 10.0), (0.0, 0.0)]),
        ];
        let result = reconstruct_polylines(fragments, 1.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 5);
        assert_eq!(result[0][0], result[0][4]);
    }
}
