use core::{
    mem,  // replace
    hint, // unreachable_unchecked
};
use super::ListStorage;
use crate::storage::Storage;

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;
/// A `VecDeque` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type VecDeque<T> = SparseStorage<T, alloc::collections::VecDeque<Slot<T>>>;

/// A wrapper around a list-like storage type which keeps element indices stable across removals.
///
/// Sparse storage with element type `E` wraps a normal storage which stores `Slot<E>`, which is a tagged union storing either an element or a "hole". Those holes count as regular slots of the backing list, but trying to get their value produces a panic, since the storage provides `E` as its element type, rather than `Slot<E>`. This behavior does not depend on whether checked or unchecked `get`/`get_mut` methods are used - all of those are guaranteed to panic upon fetching a hole.
///
/// When an element is removed, other elements are not shifted; the element is replaced with a hole instead. The holes form an intrusive free list, and subsequent insertions reuse them before the backing list is grown, so a long-lived storage does not leak slots as elements come and go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    hole_count: usize,
    first_hole: Option<usize>,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Consumes the sparse storage and returns its inner storage.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.storage
    }
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_count
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.hole_count == 0
    }
}
static HOLE_PANIC_MSG: &str = " \
the element at the specified index was a hole in the sparse storage";
unsafe impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Key = usize;
    type Element = E;

    #[inline]
    fn add(&mut self, element: Self::Element) -> usize {
        if let Some(hole) = self.first_hole {
            let slot = unsafe {
                // SAFETY: the free list only ever points at holes within bounds
                self.storage.get_unchecked_mut(hole)
            };
            self.first_hole = unsafe {
                // SAFETY: as above
                slot.hole_link()
            };
            *slot = Slot::new_element(element);
            self.hole_count -= 1;
            hole
        } else {
            self.storage.push(Slot::new_element(element));
            self.storage.len() - 1
        }
    }
    #[inline]
    #[track_caller]
    fn remove(&mut self, key: &usize) -> Self::Element {
        assert!(self.storage.len() > *key, "index out of bounds");
        let slot = unsafe {
            // SAFETY: we just did a bounds check
            self.storage.get_unchecked_mut(*key)
        };
        let element = slot.punch_hole(self.first_hole).expect(HOLE_PANIC_MSG);
        self.first_hole = Some(*key);
        self.hole_count += 1;
        element
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.hole_count
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            hole_count: 0,
            first_hole: None,
        }
    }
    #[inline]
    unsafe fn get_unchecked(&self, key: &usize) -> &Self::Element {
        self.storage.get_unchecked(*key).element_checked().expect(HOLE_PANIC_MSG)
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut Self::Element {
        self.storage.get_unchecked_mut(*key).element_checked_mut().expect(HOLE_PANIC_MSG)
    }
    #[inline]
    fn contains_key(&self, key: &usize) -> bool {
        match self.storage.get(*key) {
            Some(slot) => slot.is_element(),
            None => false,
        }
    }
    #[inline]
    #[track_caller]
    fn get(&self, key: &usize) -> Option<&Self::Element> {
        match self.storage.get(*key) {
            Some(slot) if slot.is_element() => slot.element_checked(),
            Some(..) => panic!("{}", HOLE_PANIC_MSG),
            None => None,
        }
    }
    #[inline]
    #[track_caller]
    fn get_mut(&mut self, key: &usize) -> Option<&mut Self::Element> {
        match self.storage.get_mut(*key) {
            Some(slot) if slot.is_element() => slot.element_checked_mut(),
            Some(..) => panic!("{}", HOLE_PANIC_MSG),
            None => None,
        }
    }
    #[inline(always)]
    fn new() -> Self {
        Self {
            storage: S::new(),
            hole_count: 0,
            first_hole: None,
        }
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

/// A slot inside a sparse storage.
///
/// This is an opaque structure, only used for the purpose of a `SparseStorage` being validly declarable, because leaking private types through generic argument defaults is impossible, and it'd be impossible to declare the type of the backing storage if it was explicitly different.
///
/// The representation is an implementation detail: a slot is a tagged union of the element and a "hole", with the hole variant carrying the index of the next hole in the storage's free list.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T>(SlotRepr<T>);
impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(val: T) -> Self {
        Self(SlotRepr::Element(val))
    }
    #[inline(always)]
    fn is_element(&self) -> bool {
        matches!(self.0, SlotRepr::Element(..))
    }
    fn element_checked(&self) -> Option<&T> {
        match &self.0 {
            SlotRepr::Element(x) => Some(x),
            SlotRepr::Hole(..) => None,
        }
    }
    fn element_checked_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotRepr::Element(x) => Some(x),
            SlotRepr::Hole(..) => None,
        }
    }
    #[inline]
    unsafe fn hole_link(&self) -> Option<usize> {
        match &self.0 {
            SlotRepr::Hole(x) => *x,
            SlotRepr::Element(..) => hint::unreachable_unchecked(),
        }
    }
    /// Sets the slot to a hole pointing at `next`, returning the value, or `None` (and leaving the slot untouched) if it already was a hole.
    fn punch_hole(&mut self, next: Option<usize>) -> Option<T> {
        match mem::replace(&mut self.0, SlotRepr::Hole(next)) {
            SlotRepr::Element(val) => Some(val),
            SlotRepr::Hole(old_link) => {
                // Keep the old link if it already was a hole, the free list must stay intact
                self.0 = SlotRepr::Hole(old_link);
                None
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum SlotRepr<T> {
    /// A value in the slot.
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}
