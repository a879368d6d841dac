//! [`Predicate`] definitions.

use common::Bounds;

use crate::domain::{
    filter::Choice,
    listing::{Amenities, Listing},
};

/// Pure boolean test over a single [`Listing`] attribute.
///
/// Implementors must be side-effect free and must not depend on any other
/// [`Listing`], so that any evaluation order yields the same result.
pub trait Predicate {
    /// Checks whether the provided [`Listing`] passes this [`Predicate`].
    fn matches(&self, listing: &Listing) -> bool;

    /// Indicates whether this [`Predicate`] deviates from its unconstrained
    /// default.
    fn is_active(&self) -> bool;
}

/// [`Predicate`] requiring a numeric attribute to lie within [`Bounds`].
#[derive(Clone, Copy, Debug)]
pub struct Range<T> {
    /// Requested [`Bounds`].
    pub bounds: Bounds<T>,

    /// Sentinel [`Bounds`] meaning "unconstrained".
    pub sentinel: Bounds<T>,

    /// Accessor of the checked attribute.
    pub value: fn(&Listing) -> T,
}

impl<T: Copy + PartialOrd> Predicate for Range<T> {
    fn matches(&self, listing: &Listing) -> bool {
        // Sentinel matches everything, even values lying outside of it.
        !self.is_active() || self.bounds.contains((self.value)(listing))
    }

    fn is_active(&self) -> bool {
        self.bounds != self.sentinel
    }
}

/// [`Predicate`] requiring a categorical attribute to equal the chosen one.
#[derive(Clone, Copy, Debug)]
pub struct Exact<'a, T> {
    /// Requested [`Choice`].
    pub choice: &'a Choice<T>,

    /// Accessor of the checked attribute.
    pub value: fn(&Listing) -> &T,
}

impl<T: PartialEq> Predicate for Exact<'_, T> {
    fn matches(&self, listing: &Listing) -> bool {
        match self.choice {
            Choice::Any => true,
            Choice::Exactly(v) => v == (self.value)(listing),
        }
    }

    fn is_active(&self) -> bool {
        !matches!(self.choice, Choice::Any)
    }
}

/// [`Predicate`] requiring the [`Listing`] to have all the required
/// [`Amenities`].
#[derive(Clone, Copy, Debug)]
pub struct Subset<'a> {
    /// Required [`Amenities`].
    pub required: &'a Amenities,
}

impl Predicate for Subset<'_> {
    fn matches(&self, listing: &Listing) -> bool {
        self.required.is_subset(&listing.amenities)
    }

    fn is_active(&self) -> bool {
        !self.required.is_empty()
    }
}

/// [`Predicate`] requiring a boolean attribute to be raised, if requested.
///
/// Monotonic: raising the requirement can only narrow the result.
#[derive(Clone, Copy, Debug)]
pub struct Flag {
    /// Indicator whether the attribute is required.
    pub required: bool,

    /// Accessor of the checked attribute.
    pub value: fn(&Listing) -> bool,
}

impl Predicate for Flag {
    fn matches(&self, listing: &Listing) -> bool {
        !self.required || (self.value)(listing)
    }

    fn is_active(&self) -> bool {
        self.required
    }
}
