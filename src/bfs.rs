/// Breadth-first search over an implicit graph given by a successor function. Modelled on
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html)
/// but also reports the distance and can be asked to sweep the whole reachable set.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use num_traits::{One, Zero};
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Finds a shortest path (in number of edges) from `start` to the first node satisfying
/// `success`. The parents map doubles as the visited set, so every call starts clean.
///
/// With `early_exit` the search stops the moment a successful node is discovered. Otherwise
/// every reachable node is expanded first; since nodes enter the map in order of
/// non-decreasing distance the first successful entry is still a closest one.
pub fn bfs<N, C, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
    early_exit: bool,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + One + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    if success(start) {
        return Some((vec![start.clone()], Zero::zero()));
    }
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut to_see = VecDeque::new();
    to_see.push_back(0);
    while let Some(index) = to_see.pop_front() {
        let (cost, successors) = {
            let (node, &(_, cost)) = parents.get_index(index)?;
            (cost, successors(node))
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                let found = early_exit && success(e.key());
                e.insert((index, cost + One::one()));
                if found {
                    let path = reverse_path(&parents, |&(p, _)| p, n);
                    return Some((path, cost + One::one()));
                }
                to_see.push_back(n);
            }
        }
    }
    if early_exit {
        return None;
    }
    let (n, (_, (_, cost))) = parents.iter().enumerate().find(|(_, (node, _))| success(node))?;
    Some((reverse_path(&parents, |&(p, _)| p, n), *cost))
}
