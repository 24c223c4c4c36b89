use log::trace;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::snek::{Cell, Snek};

/// Blind draws before falling back to walking the free cells.
const MAX_SAMPLES: usize = 64;

/// Picks a cell uniformly at random from the cells the snek does not cover.
///
/// Returns `None` only once the snek covers the whole board. Rejection
/// sampling runs first; after `MAX_SAMPLES` misses the choice is made
/// directly among the free cells.
pub fn generate_food(rng: &mut impl Rng, tile_count: i32, snek: &Snek) -> Option<Cell> {
    for attempt in 0..MAX_SAMPLES {
        let cell = Cell::new(rng.gen_range(0..tile_count), rng.gen_range(0..tile_count));
        if !snek.occupies(cell) {
            trace!("food at {:?} after {} draws", cell, attempt + 1);
            return Some(cell);
        }
    }

    let cell = (0..tile_count)
        .flat_map(|y| (0..tile_count).map(move |x| Cell::new(x, y)))
        .filter(|cell| !snek.occupies(*cell))
        .choose(rng);
    trace!("food at {:?} from free-cell scan", cell);
    cell
}
