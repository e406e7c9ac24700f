use std::cell::RefCell;
use std::rc::Rc;

/// Holds a value that is built on first demand and then reused.
///
/// A failed build leaves the slot empty so a later call can try again; a
/// successful build is never repeated.
pub struct LazySlot<T> {
    value: RefCell<Option<Rc<T>>>,
}

impl<T> Default for LazySlot<T> {
    fn default() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }
}

impl<T> LazySlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Rc<T>> {
        self.value.borrow().clone()
    }

    pub fn is_built(&self) -> bool {
        self.value.borrow().is_some()
    }

    pub fn get_or_try_build<E>(
        &self,
        build: impl FnOnce() -> Result<T, E>,
    ) -> Result<Rc<T>, E> {
        if let Some(v) = self.get() {
            return Ok(v);
        }
        let v = Rc::new(build()?);
        *self.value.borrow_mut() = Some(v.clone());
        Ok(v)
    }
}
