//! Ownership of the live chart instances.
//!
//! Each canvas gets one [`ChartSlot`]. Installing a new chart always
//! destroys the previous one first, so a slot never holds more than one.

use crate::charts::BarChart;

/// Something that holds renderer resources which must be released when it
/// is replaced.
pub trait ChartInstance {
    fn destroy(&self);
}

impl ChartInstance for BarChart {
    fn destroy(&self) {
        BarChart::destroy(self);
    }
}

#[derive(Debug)]
pub struct ChartSlot<T> {
    current: Option<T>,
}

impl<T> Default for ChartSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: ChartInstance> ChartSlot<T> {
    /// Destroys and drops the current chart, then installs `chart`.
    pub fn replace(&mut self, chart: T) -> &T {
        if let Some(previous) = self.current.take() {
            previous.destroy();
        }
        self.current.insert(chart)
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}

/// The chart slots the insights screen draws from.
#[derive(Default)]
pub struct RenderState {
    pub genre_chart: ChartSlot<BarChart>,
    pub rating_chart: ChartSlot<BarChart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many instances exist and how many were destroyed.
    struct Tracked {
        live: Rc<Cell<usize>>,
        destroyed: Rc<Cell<usize>>,
    }

    impl Tracked {
        fn new(live: &Rc<Cell<usize>>, destroyed: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self {
                live: Rc::clone(live),
                destroyed: Rc::clone(destroyed),
            }
        }
    }

    impl ChartInstance for Tracked {
        fn destroy(&self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn empty_slot_has_no_chart() {
        let slot: ChartSlot<Tracked> = ChartSlot::default();
        assert!(!slot.is_live());
        assert!(slot.get().is_none());
    }

    #[test]
    fn replacing_destroys_the_previous_chart() {
        let live = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::default();

        slot.replace(Tracked::new(&live, &destroyed));
        assert_eq!(live.get(), 1);
        assert_eq!(destroyed.get(), 0);

        slot.replace(Tracked::new(&live, &destroyed));
        assert_eq!(live.get(), 1);
        assert_eq!(destroyed.get(), 1);

        slot.replace(Tracked::new(&live, &destroyed));
        assert_eq!(live.get(), 1);
        assert_eq!(destroyed.get(), 2);
        assert!(slot.is_live());
    }

    #[test]
    fn dropping_the_slot_releases_its_chart() {
        let live = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        {
            let mut slot = ChartSlot::default();
            slot.replace(Tracked::new(&live, &destroyed));
        }
        assert_eq!(live.get(), 0);
    }
}
