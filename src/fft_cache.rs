use std::collections::HashMap;
use std::sync::Arc;

use crate::radix::Radix;
use crate::twiddles::TwiddleTable;
use crate::{Fft2d, FftDirection, Length2d};

/// Planned 2D FFTs, keyed by grid shape and radix family
pub(crate) struct Fft2dCache {
    cache: HashMap<(usize, usize, Radix), Arc<dyn Fft2d>>,
}
impl Fft2dCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }
    pub fn get(&self, width: usize, height: usize, radix: Radix) -> Option<Arc<dyn Fft2d>> {
        self.cache.get(&(width, height, radix)).map(Arc::clone)
    }
    pub fn insert(&mut self, fft: &Arc<dyn Fft2d>) {
        let cloned = Arc::clone(fft);
        self.cache
            .insert((cloned.width(), cloned.height(), cloned.radix()), cloned);
    }
}

/// Forward twiddle tables, keyed by axis length and radix family. Axes of the same length share one table, both
/// within a grid and across grids.
pub(crate) struct TwiddleCache {
    cache: HashMap<(usize, Radix), Arc<TwiddleTable>>,
}
impl TwiddleCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }
    pub fn get_or_build(&mut self, len: usize, radix: Radix) -> Arc<TwiddleTable> {
        let table = self
            .cache
            .entry((len, radix))
            .or_insert_with(|| Arc::new(TwiddleTable::new(len, radix, FftDirection::Forward)));
        Arc::clone(table)
    }
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
